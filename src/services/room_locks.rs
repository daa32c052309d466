// src/services/room_locks.rs

use std::{
    collections::HashMap,
    sync::{Arc, Mutex as StdMutex, PoisonError},
};

use tokio::sync::{Mutex, OwnedMutexGuard};

type LockMap = Arc<StdMutex<HashMap<i64, Arc<Mutex<()>>>>>;

/// Um mutex por quarto. Quem segura o guard é o único escrevendo reservas do quarto.
/// A entrada do mapa sai quando o último interessado no quarto libera o guard.
#[derive(Clone, Default)]
pub struct RoomLocks {
    locks: LockMap,
}

/// Guard de um quarto travado.
pub struct RoomGuard {
    room_id: i64,
    guard: Option<OwnedMutexGuard<()>>,
    locks: LockMap,
}

impl RoomLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn acquire(&self, room_id: i64) -> RoomGuard {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
            locks.entry(room_id).or_default().clone()
        };

        RoomGuard {
            room_id,
            guard: Some(lock.lock_owned().await),
            locks: self.locks.clone(),
        }
    }

    #[cfg(test)]
    pub fn tracked_rooms(&self) -> usize {
        self.locks.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl Drop for RoomGuard {
    fn drop(&mut self) {
        self.guard.take();

        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        // Só o mapa ainda referencia o mutex: ninguém esperando por este quarto.
        if locks
            .get(&self.room_id)
            .is_some_and(|lock| Arc::strong_count(lock) == 1)
        {
            locks.remove(&self.room_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn same_room_is_exclusive() {
        let locks = RoomLocks::new();
        let guard = locks.acquire(1).await;

        let other = locks.clone();
        let waiting = tokio::spawn(async move {
            let _guard = other.acquire(1).await;
        });

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(!waiting.is_finished());

        drop(guard);
        waiting.await.unwrap();
    }

    #[tokio::test]
    async fn different_rooms_do_not_wait() {
        let locks = RoomLocks::new();
        let _first = locks.acquire(1).await;
        let second = tokio::time::timeout(Duration::from_millis(100), locks.acquire(2)).await;
        assert!(second.is_ok());
    }

    #[tokio::test]
    async fn released_rooms_leave_the_map() {
        let locks = RoomLocks::new();

        let guard = locks.acquire(7).await;
        assert_eq!(locks.tracked_rooms(), 1);

        drop(guard);
        assert_eq!(locks.tracked_rooms(), 0);
    }

    #[tokio::test]
    async fn entry_survives_while_someone_waits() {
        let locks = RoomLocks::new();
        let guard = locks.acquire(3).await;

        let other = locks.clone();
        let waiting = tokio::spawn(async move {
            let _guard = other.acquire(3).await;
        });
        tokio::time::sleep(Duration::from_millis(50)).await;

        // o segundo ainda precisa do mesmo mutex
        drop(guard);
        assert_eq!(locks.tracked_rooms(), 1);

        waiting.await.unwrap();
        assert_eq!(locks.tracked_rooms(), 0);
    }
}

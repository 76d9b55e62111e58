//! 取消信号 - 基础设施层
//!
//! 运行只能在页或候选人之间取消，进行中的请求不会被打断

use tokio::sync::watch;

/// 发出取消
#[derive(Debug)]
pub struct CancelHandle(watch::Sender<bool>);

/// 观察取消
#[derive(Debug, Clone)]
pub struct CancelSignal(watch::Receiver<bool>);

impl CancelHandle {
    pub fn cancel(&self) {
        // 接收端全部丢弃时发送失败，此时也就无需取消
        let _ = self.0.send(true);
    }
}

impl CancelSignal {
    pub fn is_cancelled(&self) -> bool {
        *self.0.borrow()
    }

    /// 永不取消
    pub fn never() -> Self {
        let (_, rx) = watch::channel(false);
        Self(rx)
    }
}

pub fn cancel_pair() -> (CancelHandle, CancelSignal) {
    let (tx, rx) = watch::channel(false);
    (CancelHandle(tx), CancelSignal(rx))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_is_observed_by_clones() {
        let (handle, signal) = cancel_pair();
        let other = signal.clone();
        assert!(!signal.is_cancelled());
        handle.cancel();
        assert!(signal.is_cancelled());
        assert!(other.is_cancelled());
    }

    #[test]
    fn test_never_stays_false() {
        assert!(!CancelSignal::never().is_cancelled());
    }
}

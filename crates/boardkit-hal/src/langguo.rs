//! LangGuo board adapter
//!
//! LangGuo firmware only listens for reboot and shutdown broadcasts.

use crate::vendor::{LangGuoApi, VendorResult};

pub const ACTION_REBOOT: &str = "android.intent.action.reboot";
pub const ACTION_SHUTDOWN: &str = "android.intent.action.shutdown";

pub struct LangGuoBoard {
    service: Box<dyn LangGuoApi>,
}

impl LangGuoBoard {
    pub fn new(service: Box<dyn LangGuoApi>) -> Self {
        Self { service }
    }

    pub fn reboot(&self) -> VendorResult<()> {
        self.service.send_broadcast(ACTION_REBOOT)
    }

    pub fn shutdown(&self) -> VendorResult<()> {
        self.service.send_broadcast(ACTION_SHUTDOWN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockProvider;
    use crate::vendor::ServiceProvider;

    #[test]
    fn test_broadcast_actions() {
        let provider = MockProvider::new();
        let board = LangGuoBoard::new(provider.langguo().unwrap());
        board.shutdown().unwrap();

        let state = provider.state();
        let state = state.read().unwrap();
        assert_eq!(
            state.last_call("send_broadcast").unwrap().args,
            vec![ACTION_SHUTDOWN]
        );
    }
}

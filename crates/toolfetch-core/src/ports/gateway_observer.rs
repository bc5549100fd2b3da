//! Hook for the gateway address discovered during a refresh.

/// Receives the default gateway each time a refresh discovers it.
pub trait GatewayObserver: Send + Sync {
    fn gateway_discovered(&self, gateway: &str);
}

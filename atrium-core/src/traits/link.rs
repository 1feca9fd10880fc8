//! Datagram link trait

/// Trait for the connectionless network link
///
/// The link is best-effort: no delivery guarantee, no retransmission.
/// Association, reconnection, and backoff live in the implementation;
/// when the link is down, `poll_recv` simply returns `None` and the rest
/// of the hub runs unaffected.
pub trait Datagram {
    /// Poll for one pending inbound datagram
    ///
    /// Copies the datagram into `buf` and returns its length, or `None`
    /// when nothing is pending. Datagrams longer than `buf` are dropped.
    fn poll_recv(&mut self, buf: &mut [u8]) -> Option<usize>;

    /// Send one datagram, best-effort
    fn send(&mut self, datagram: &[u8]);
}

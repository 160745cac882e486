use crawlscope_types::{CrawlNode, PeerId};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Transport protocols seen per peer across all crawls.
///
/// Each protocol is counted once per peer, no matter how many addresses of
/// that kind the peer announced or in how many crawls it appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProtocolCensus {
    per_peer: BTreeMap<PeerId, BTreeSet<String>>,
}

/// One `nodeid;protocol` output row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProtocolRow {
    pub peer_id: PeerId,
    pub protocol: String,
}

impl ProtocolCensus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Union the node's transports into its protocol set.
    ///
    /// Nodes without an id or without any address are ignored.
    pub fn record(&mut self, node: &CrawlNode) {
        if node.multiaddrs.is_empty() {
            return;
        }
        let Ok(peer_id) = PeerId::parse(&node.id) else {
            return;
        };

        let transports: Vec<String> = node
            .multiaddrs
            .iter()
            .filter_map(|addr| transport_of(addr))
            .map(str::to_string)
            .collect();
        if transports.is_empty() {
            return;
        }

        self.per_peer.entry(peer_id).or_default().extend(transports);
    }

    pub fn protocols(&self, peer_id: &PeerId) -> Option<&BTreeSet<String>> {
        self.per_peer.get(peer_id)
    }

    pub fn peer_count(&self) -> usize {
        self.per_peer.len()
    }

    /// Rows sorted by peer id, then protocol
    pub fn rows(&self) -> Vec<ProtocolRow> {
        self.per_peer
            .iter()
            .flat_map(|(peer_id, protocols)| {
                protocols.iter().map(move |protocol| ProtocolRow {
                    peer_id: peer_id.clone(),
                    protocol: protocol.clone(),
                })
            })
            .collect()
    }

    /// Number of peers that announced each protocol
    pub fn counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for protocol in self.per_peer.values().flatten() {
            *counts.entry(protocol.clone()).or_insert(0) += 1;
        }
        counts
    }
}

/// Leading protocol name of a multiaddr: `/ip4/147.75.199.141/tcp/24697` → `ip4`
pub fn transport_of(multiaddr: &str) -> Option<&str> {
    multiaddr
        .trim()
        .strip_prefix('/')?
        .split('/')
        .next()
        .filter(|p| !p.is_empty())
}

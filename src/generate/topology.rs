//! Fat-tree topology generator with optional data-centre interconnect
//!
//! Output format:
//! - line 1: `<total_nodes> <total_switches> <total_links>`
//! - line 2: switch ids separated by spaces (DCI switches included)
//! - then one `<u> <v> <bandwidth> <delay> <loss>` line per link
//!
//! With more than one DC every DC gets a DCI switch, each core switch links to
//! its DC's DCI switch and the DCI switches form a full mesh. With a single DC
//! the result is a plain fat-tree.

use crate::errors::{AppError, AppResult};
use serde::Serialize;
use std::io::Write;

const LINK_BANDWIDTH_GBPS: u64 = 100;
const LINK_DELAY: &str = "1us";
const DCI_DELAY: &str = "400us";
const LINK_LOSS: &str = "0.000000";

/// One undirected link of the generated topology
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub u: u64,
    pub v: u64,
    pub bandwidth: String,
    pub delay: &'static str,
}

/// Node counts and id layout of a generated topology
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopologySummary {
    pub k: u32,
    pub num_dcs: u32,
    pub hosts: u64,
    pub edges: u64,
    pub aggs: u64,
    pub cores: u64,
    pub dci: u64,
    pub switches: u64,
    pub nodes: u64,
    pub links: u64,
    /// First switch id; hosts occupy `0..first_switch`
    pub first_switch: u64,
    pub last_switch: u64,
}

/// Fat-tree (+DCI) generator for `k`-ary pods across `num_dcs` data centres
#[derive(Debug, Clone)]
pub struct FatTreeDciGenerator {
    k: u32,
    num_dcs: u32,
}

impl FatTreeDciGenerator {
    pub fn new(k: u32, num_dcs: u32) -> AppResult<Self> {
        if k == 0 || k % 2 != 0 {
            return Err(AppError::Config(format!(
                "Fat-tree k must be a positive even number, got {}",
                k
            )));
        }
        if num_dcs == 0 {
            return Err(AppError::Config(
                "Number of DCs must be positive".to_string(),
            ));
        }
        Ok(Self { k, num_dcs })
    }

    fn half_k(&self) -> u64 {
        u64::from(self.k / 2)
    }

    fn pods(&self) -> u64 {
        u64::from(self.k)
    }

    fn hosts_per_dc(&self) -> u64 {
        self.pods() * self.half_k() * self.half_k()
    }

    fn edges_per_dc(&self) -> u64 {
        self.pods() * self.half_k()
    }

    fn aggs_per_dc(&self) -> u64 {
        self.pods() * self.half_k()
    }

    fn cores_per_dc(&self) -> u64 {
        self.half_k() * self.half_k()
    }

    fn dcs(&self) -> u64 {
        u64::from(self.num_dcs)
    }

    fn dci_count(&self) -> u64 {
        if self.num_dcs > 1 {
            self.dcs()
        } else {
            0
        }
    }

    fn host_start(&self) -> u64 {
        0
    }

    fn edge_start(&self) -> u64 {
        self.host_start() + self.hosts_per_dc() * self.dcs()
    }

    fn agg_start(&self) -> u64 {
        self.edge_start() + self.edges_per_dc() * self.dcs()
    }

    fn core_start(&self) -> u64 {
        self.agg_start() + self.aggs_per_dc() * self.dcs()
    }

    fn dci_start(&self) -> u64 {
        self.core_start() + self.cores_per_dc() * self.dcs()
    }

    fn switch_count(&self) -> u64 {
        (self.edges_per_dc() + self.aggs_per_dc() + self.cores_per_dc()) * self.dcs()
            + self.dci_count()
    }

    /// Build every link, DC by DC, followed by the DCI mesh
    pub fn links(&self) -> Vec<Link> {
        let mut links = Vec::new();
        let normal = format!("{}Gbps", LINK_BANDWIDTH_GBPS);
        let half_k = self.half_k();

        for dc in 0..self.dcs() {
            let dc_host_start = self.host_start() + dc * self.hosts_per_dc();
            let dc_edge_start = self.edge_start() + dc * self.edges_per_dc();
            let dc_agg_start = self.agg_start() + dc * self.aggs_per_dc();
            let dc_core_start = self.core_start() + dc * self.cores_per_dc();

            // Servers to edge switches
            let mut server = dc_host_start;
            for pod in 0..self.pods() {
                for e in 0..half_k {
                    let edge = dc_edge_start + pod * half_k + e;
                    for _ in 0..half_k {
                        links.push(Link::new(server, edge, &normal, LINK_DELAY));
                        server += 1;
                    }
                }
            }

            // Edge to aggregation, full bipartite within each pod
            for pod in 0..self.pods() {
                for e in 0..half_k {
                    let edge = dc_edge_start + pod * half_k + e;
                    for a in 0..half_k {
                        let agg = dc_agg_start + pod * half_k + a;
                        links.push(Link::new(edge, agg, &normal, LINK_DELAY));
                    }
                }
            }

            // Core j attaches to aggregation switch (j mod k/2) of every pod
            for core_index in 0..self.cores_per_dc() {
                let core = dc_core_start + core_index;
                let agg_offset = core_index % half_k;
                for pod in 0..self.pods() {
                    let agg = dc_agg_start + pod * half_k + agg_offset;
                    links.push(Link::new(agg, core, &normal, LINK_DELAY));
                }
            }

            if self.num_dcs > 1 {
                let dci = self.dci_start() + dc;
                for c in 0..self.cores_per_dc() {
                    links.push(Link::new(dc_core_start + c, dci, &normal, LINK_DELAY));
                }
            }
        }

        if self.num_dcs > 1 {
            let dci_bandwidth = format!("{}Gbps", LINK_BANDWIDTH_GBPS * self.cores_per_dc());
            for i in 0..self.dcs() {
                for j in (i + 1)..self.dcs() {
                    links.push(Link::new(
                        self.dci_start() + i,
                        self.dci_start() + j,
                        &dci_bandwidth,
                        DCI_DELAY,
                    ));
                }
            }
        }

        links
    }

    /// Node counts without building the link list
    pub fn summary(&self) -> TopologySummary {
        let dcs = self.dcs();
        let links_per_dc = self.hosts_per_dc()
            + self.edges_per_dc() * self.half_k()
            + self.cores_per_dc() * self.pods();
        let dci_links = if self.num_dcs > 1 {
            self.cores_per_dc() * dcs + dcs * (dcs - 1) / 2
        } else {
            0
        };
        let switches = self.switch_count();

        TopologySummary {
            k: self.k,
            num_dcs: self.num_dcs,
            hosts: self.hosts_per_dc() * dcs,
            edges: self.edges_per_dc() * dcs,
            aggs: self.aggs_per_dc() * dcs,
            cores: self.cores_per_dc() * dcs,
            dci: self.dci_count(),
            switches,
            nodes: self.hosts_per_dc() * dcs + switches,
            links: links_per_dc * dcs + dci_links,
            first_switch: self.edge_start(),
            last_switch: self.edge_start() + switches - 1,
        }
    }

    /// Write the topology file
    pub fn write<W: Write>(&self, out: &mut W) -> AppResult<TopologySummary> {
        let links = self.links();
        let summary = self.summary();

        writeln!(out, "{} {} {}", summary.nodes, summary.switches, links.len())?;
        let switch_ids: Vec<String> = (summary.first_switch..=summary.last_switch)
            .map(|id| id.to_string())
            .collect();
        writeln!(out, "{}", switch_ids.join(" "))?;
        for link in &links {
            writeln!(
                out,
                "{} {} {} {} {}",
                link.u, link.v, link.bandwidth, link.delay, LINK_LOSS
            )?;
        }

        Ok(summary)
    }
}

impl Link {
    fn new(u: u64, v: u64, bandwidth: &str, delay: &'static str) -> Self {
        Self {
            u,
            v,
            bandwidth: bandwidth.to_string(),
            delay,
        }
    }
}

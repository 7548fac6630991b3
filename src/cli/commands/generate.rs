use crate::errors::AppResult;
use crate::generate::{self, FatTreeDciGenerator, FlowListGenerator, TraceGenerator};
use clap::{Args, Subcommand};
use std::path::PathBuf;
use tracing::info;

/// Generate simulator input files
#[derive(Args)]
pub struct GenerateCommand {
    #[command(subcommand)]
    pub target: GenerateTarget,
}

#[derive(Subcommand)]
pub enum GenerateTarget {
    /// Fat-tree topology, with a DCI mesh when more than one DC is requested
    Topology {
        /// Fat-tree arity (even)
        #[arg(long)]
        k: u32,

        /// Number of data centres
        #[arg(long, default_value_t = 1)]
        dcs: u32,

        #[arg(long, default_value = "topology.txt")]
        output: PathBuf,
    },

    /// Incast flow list: every server sends one flow to the last server
    Flows {
        /// Number of servers
        #[arg(long)]
        servers: u32,

        /// Priority group of every flow
        #[arg(long, default_value_t = 3)]
        priority_group: u32,

        /// Destination port of every flow
        #[arg(long, default_value_t = 5000)]
        dst_port: u16,

        /// Maximum packet count per flow
        #[arg(long, default_value_t = 100_000)]
        max_packets: u64,

        /// Start time of every flow, in seconds
        #[arg(long, default_value_t = 0.1)]
        start_time: f64,

        #[arg(long, default_value = "flow.txt")]
        output: PathBuf,
    },

    /// Node list for packet tracing
    Trace {
        /// Number of nodes
        #[arg(long)]
        nodes: u32,

        #[arg(long, default_value = "trace.txt")]
        output: PathBuf,
    },
}

impl GenerateCommand {
    pub fn run(&self) -> AppResult<()> {
        match &self.target {
            GenerateTarget::Topology { k, dcs, output } => {
                let generator = FatTreeDciGenerator::new(*k, *dcs)?;
                let summary = generate::write_to_file(output, |w| generator.write(w))?;
                info!("Topology written to {}", output.display());

                println!("\n=== Fat-Tree + DCI Topology Summary ===");
                println!("k: {}, DCs: {}", summary.k, summary.num_dcs);
                println!(
                    "Totals: switches={} (edges={}, aggs={}, cores={}, dci={})",
                    summary.switches, summary.edges, summary.aggs, summary.cores, summary.dci
                );
                println!("Total nodes: {}", summary.nodes);
                println!("Total links: {}", summary.links);
                println!(
                    "ID ranges:\n  hosts: 0 - {}\n  switches: {} - {}",
                    summary.first_switch - 1,
                    summary.first_switch,
                    summary.last_switch
                );
                println!("Topology written to: {}", output.display());
                Ok(())
            }

            GenerateTarget::Flows {
                servers,
                priority_group,
                dst_port,
                max_packets,
                start_time,
                output,
            } => {
                let generator = FlowListGenerator {
                    priority_group: *priority_group,
                    dst_port: *dst_port,
                    max_packets: *max_packets,
                    start_time: *start_time,
                    ..FlowListGenerator::new(*servers)?
                };
                let count = generate::write_to_file(output, |w| generator.write(w))?;
                println!("{} flows written to: {}", count, output.display());
                Ok(())
            }

            GenerateTarget::Trace { nodes, output } => {
                let generator = TraceGenerator::new(*nodes)?;
                let count = generate::write_to_file(output, |w| generator.write(w))?;
                println!("Trace with {} nodes written to: {}", count, output.display());
                Ok(())
            }
        }
    }
}

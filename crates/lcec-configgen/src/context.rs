// crates/lcec-configgen/src/context.rs

//! Per-run build state threaded through the generator.

use crate::GeneratorOptions;
use crate::model::{ConfigRoot, MasterConfig, SlaveConfig};
use log::debug;
use std::collections::BTreeMap;

/// Accumulates configured slaves into their master groups and hands out
/// slave names. One context is created per run and consumed by [`finish`].
///
/// [`finish`]: BuildContext::finish
#[derive(Debug)]
pub struct BuildContext {
    options: GeneratorOptions,
    masters: BTreeMap<u32, MasterConfig>,
    device_sequence: u32,
}

impl BuildContext {
    pub fn new(options: GeneratorOptions) -> Self {
        Self {
            options,
            masters: BTreeMap::new(),
            device_sequence: 0,
        }
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Returns the next slave name: `D1`, `D2`, ... across all masters.
    pub fn next_name(&mut self) -> String {
        self.device_sequence += 1;
        format!("D{}", self.device_sequence)
    }

    /// Appends `slave` to master `master`, creating the master on first use.
    pub fn push(&mut self, master: u32, slave: SlaveConfig) {
        let options = &self.options;
        let group = self.masters.entry(master).or_insert_with(|| {
            debug!("[Config] Opening master {}", master);
            MasterConfig {
                index: master,
                app_time_period: options.app_time_period,
                ref_clock_sync_cycles: options.ref_clock_sync_cycles,
                slaves: Vec::new(),
            }
        });
        group.slaves.push(slave);
    }

    /// Closes the run, returning the masters sorted by index.
    pub fn finish(self) -> ConfigRoot {
        ConfigRoot {
            masters: self.masters.into_values().collect(),
        }
    }
}

//! Dashboard refresh state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard polls two endpoints independently. Each keeps its own
//! [`RequestSeq`] so a slow response never replaces newer data. Accepted
//! machine lists are turned into per-card change plans against the card
//! views last applied to the DOM.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use std::collections::HashMap;

use views::card::{CardChange, CardView, reconcile};
use views::clock::Clock;
use views::seq::RequestSeq;
use views::summary::{AreaSummary, StatusCounts, summarize_areas};
use wire::{AreaNode, MachineSnapshot};

/// Dashboard parts present on the current page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RefreshTargets {
    /// Server-rendered `.machine-card` elements.
    pub cards: bool,
    /// The `#area-summary` container.
    pub summary: bool,
}

impl RefreshTargets {
    /// Cards and the summary both read the machine list.
    pub fn polls_machines(self) -> bool {
        self.cards || self.summary
    }

    pub fn polls_hierarchy(self) -> bool {
        self.summary
    }
}

/// Changes to apply to one machine card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardPlan {
    pub machine_id: String,
    pub changes: Vec<CardChange>,
}

#[derive(Clone, Debug, Default)]
pub struct DashboardState {
    pub machines_seq: RequestSeq,
    pub hierarchy_seq: RequestSeq,
    pub machines: Vec<MachineSnapshot>,
    pub hierarchy: Vec<AreaNode>,
    pub counts: StatusCounts,
    /// Card views last written to the DOM, by machine id.
    applied: HashMap<String, CardView>,
}

impl DashboardState {
    /// Store a machine-status response if it is not stale.
    ///
    /// Returns the card plans for machines whose card exists on the page, or
    /// `None` when the response was dropped. `card_exists` is consulted once
    /// per machine; machines without a card are skipped and not remembered.
    pub fn accept_machines(
        &mut self,
        seq: u64,
        machines: Vec<MachineSnapshot>,
        clock: &Clock,
        card_exists: impl Fn(&str) -> bool,
    ) -> Option<Vec<CardPlan>> {
        if !self.machines_seq.accept(seq) {
            return None;
        }
        let mut plans = Vec::new();
        for machine in &machines {
            if !card_exists(&machine.machine_id) {
                continue;
            }
            let next = CardView::build(machine, clock);
            let changes = reconcile(self.applied.get(&machine.machine_id), &next);
            self.applied.insert(machine.machine_id.clone(), next);
            if !changes.is_empty() {
                plans.push(CardPlan {
                    machine_id: machine.machine_id.clone(),
                    changes,
                });
            }
        }
        self.counts = StatusCounts::tally(&machines);
        self.machines = machines;
        Some(plans)
    }

    /// Store a hierarchy response if it is not stale.
    pub fn accept_hierarchy(&mut self, seq: u64, hierarchy: Vec<AreaNode>) -> bool {
        if !self.hierarchy_seq.accept(seq) {
            return false;
        }
        self.hierarchy = hierarchy;
        true
    }

    /// Area/zone summary over the current hierarchy and machine list.
    pub fn summaries(&self) -> Vec<AreaSummary> {
        summarize_areas(&self.hierarchy, &self.machines)
    }

    /// Forget what was applied to a card so the next plan rewrites it fully.
    pub fn forget_card(&mut self, machine_id: &str) {
        self.applied.remove(machine_id);
    }
}

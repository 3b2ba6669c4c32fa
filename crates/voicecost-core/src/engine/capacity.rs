//! Capacity sizing: reserved instances for Pipecat Cloud and node counts
//! for self-hosted clusters, both derived from monthly minutes with
//! occupancy heuristics.

use crate::pricing::{ASSUMPTIONS, AZURE_AKS, IDLE_CREATION_DELAY_SEC, MINUTES_PER_MONTH};

/// Reserved min-agents to keep running 24/7 on Pipecat Cloud.
///
/// Optimal Reserved = MAX(Baseline Sessions, CPS x Idle Creation Delay)
/// where baseline is the average concurrency implied by monthly minutes
/// and CPS approximates the peak call arrival rate.
pub fn optimal_reserved(monthly_minutes: f64) -> u64 {
    if monthly_minutes <= 0.0 {
        return 0;
    }
    let baseline = monthly_minutes / MINUTES_PER_MONTH;

    let peak_concurrent = baseline * ASSUMPTIONS.peak_to_avg_ratio;
    let avg_session_sec = ASSUMPTIONS.avg_session_minutes * 60.0;
    let calls_per_sec = peak_concurrent / avg_session_sec;
    let burst = calls_per_sec * IDLE_CREATION_DELAY_SEC;

    baseline.max(burst).ceil() as u64
}

/// Self-hosted node plan: how many compute nodes, at what monthly cost.
#[derive(Debug, Clone, Copy)]
pub struct NodePlan {
    pub nodes: u64,
    pub cost: f64,
}

/// Size an AKS cluster for the given volume. Always at least one node;
/// the control-plane fee is charged even at zero volume.
pub fn self_hosted_nodes(monthly_minutes: f64) -> NodePlan {
    let concurrent_sessions = (monthly_minutes / MINUTES_PER_MONTH).ceil();
    let peak_concurrent = (concurrent_sessions * ASSUMPTIONS.peak_to_avg_ratio).ceil().max(1.0);

    let nodes = (peak_concurrent / AZURE_AKS.concurrent_agents_per_node).ceil().max(1.0);
    let cost = AZURE_AKS.control_plane + nodes * AZURE_AKS.node_monthly;

    NodePlan { nodes: nodes as u64, cost }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_zero_volume() {
        assert_eq!(optimal_reserved(0.0), 0);
        assert_eq!(optimal_reserved(-5.0), 0);
    }

    #[test]
    fn test_reserved_small_volume_rounds_up_to_one() {
        // 10K min/mo: baseline ~0.23, burst ~0.023 -> 1 reserved agent.
        assert_eq!(optimal_reserved(10_000.0), 1);
    }

    #[test]
    fn test_reserved_scales_with_baseline() {
        // 43,200 min/mo is exactly 1 continuous agent.
        assert_eq!(optimal_reserved(MINUTES_PER_MONTH), 1);
        assert_eq!(optimal_reserved(MINUTES_PER_MONTH * 4.0), 4);
        // 4.5 average concurrency rounds up.
        assert_eq!(optimal_reserved(MINUTES_PER_MONTH * 4.5), 5);
    }

    #[test]
    fn test_reserved_monotonic() {
        let mut prev = 0;
        for m in (0..=500_000).step_by(10_000) {
            let r = optimal_reserved(m as f64);
            assert!(r >= prev, "reserved count decreased at {} minutes", m);
            prev = r;
        }
    }

    #[test]
    fn test_node_plan_minimum_footprint() {
        // Even at zero volume the cluster is one node plus control plane.
        let plan = self_hosted_nodes(0.0);
        assert_eq!(plan.nodes, 1);
        assert!((plan.cost - (73.0 + 70.0)).abs() < 1e-9);
    }

    #[test]
    fn test_node_plan_scales_with_peak() {
        // 43,200 x 10 minutes: 10 avg concurrent, 20 peak, 6 bots/node -> 4 nodes.
        let plan = self_hosted_nodes(MINUTES_PER_MONTH * 10.0);
        assert_eq!(plan.nodes, 4);
        assert!((plan.cost - (73.0 + 4.0 * 70.0)).abs() < 1e-9);
    }
}

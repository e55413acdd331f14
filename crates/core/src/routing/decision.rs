//! Output of the route reconciliation policy.

use itertools::Itertools;
use metro_watch_transit::PathResult;

/// Explanation attached to a route decision.
///
/// Station lists hold display names, in path order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Advisory {
    #[default]
    None,
    /// The shortest route crosses stations with many recent reports
    SoftWarning {
        stations: Vec<String>,
        alternative_available: bool,
    },
    /// The shortest route crosses closed stations; a detour is shown instead
    HardBlock { stations: Vec<String> },
    /// No route exists under the current closures
    Unreachable { stations: Vec<String> },
}

impl Advisory {
    pub fn stations(&self) -> &[String] {
        match self {
            Self::None => &[],
            Self::SoftWarning { stations, .. }
            | Self::HardBlock { stations }
            | Self::Unreachable { stations } => stations.as_slice(),
        }
    }

    /// User-facing banner text, `None` when there is nothing to say
    pub fn message(&self) -> Option<String> {
        let names = self.stations().iter().join(", ");
        match self {
            Self::None => None,
            Self::SoftWarning {
                alternative_available: true,
                ..
            } => Some(format!(
                "There is a shorter route, but it passes through stations with a high volume of reports: {names}. An alternative route is also shown."
            )),
            Self::SoftWarning {
                alternative_available: false,
                ..
            } => Some(format!(
                "The shortest route passes through stations with a high volume of reports: {names}. No alternative routes are available."
            )),
            Self::HardBlock { .. } => Some(format!(
                "Closed stations: {names}. Showing the available alternative route."
            )),
            Self::Unreachable { stations } if stations.is_empty() => {
                Some("No route connects these stations.".to_owned())
            }
            Self::Unreachable { .. } => {
                Some(format!("No routes available. Closed stations: {names}."))
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RouteDecision {
    pub primary_path: PathResult,
    pub alternative_path: Option<PathResult>,
    pub advisory: Advisory,
    /// A hard closure forced the restricted search
    pub is_hard_blocked: bool,
}

impl RouteDecision {
    pub fn is_reachable(&self) -> bool {
        self.primary_path.is_reachable()
    }

    pub fn message(&self) -> Option<String> {
        self.advisory.message()
    }
}

/// Number of planes in the fleet
pub const FLEET_SIZE: usize = 8;

/// Seats per plane
pub const PLANE_CAPACITY: u64 = 10;

/// Plane identifier, an index into the fleet roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlaneId(pub(crate) usize);

impl PlaneId {
    /// Create a new plane ID
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the roster index
    pub fn index(&self) -> usize {
        self.0
    }

    /// Build the roster of ids `0..count`
    pub fn roster(count: usize) -> Vec<PlaneId> {
        (0..count).map(PlaneId).collect()
    }
}

impl std::fmt::Display for PlaneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Phase of a plane's tour cycle, as reported to the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Boarding,
    Taxi,
    Takeoff,
    Tour,
    Landing,
    Deplaning,
    Done,
}

impl Phase {
    /// Full status label
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Boarding => "BOARDING",
            Phase::Taxi => "TAXI",
            Phase::Takeoff => "TAKEOFF",
            Phase::Tour => "TOUR",
            Phase::Landing => "LANDING",
            Phase::Deplaning => "DEPLANING",
            Phase::Done => "DONE",
        }
    }

    /// Five-character label for compact status boards
    pub fn short_label(&self) -> &'static str {
        match self {
            Phase::Boarding => "BOARD",
            Phase::Taxi => "TAXI",
            Phase::Takeoff => "TKOFF",
            Phase::Tour => "TOUR",
            Phase::Landing => "LAND",
            Phase::Deplaning => "DEPLN",
            Phase::Done => "DONE",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

//! Fitting loss-coefficient table.

/// Fitting types with a fixed loss coefficient K.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fitting {
    GateValveOpen,
    BallValveOpen,
    CheckValve,
    Elbow90,
    Elbow45,
    TeeRun,
    TeeBranch,
    Entrance,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FittingEntry {
    pub fitting: Fitting,
    pub canonical_id: &'static str,
    pub display_name: &'static str,
    pub aliases: &'static [&'static str],
    pub k: f64,
}

impl FittingEntry {
    pub fn matches(&self, label: &str) -> bool {
        let label = label.trim();
        self.canonical_id.eq_ignore_ascii_case(label)
            || self.display_name.eq_ignore_ascii_case(label)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(label))
    }
}

const FITTING_TABLE: [FittingEntry; 9] = [
    FittingEntry {
        fitting: Fitting::GateValveOpen,
        canonical_id: "gate_valve_open",
        display_name: "Open gate valve",
        aliases: &["gate valve"],
        k: 0.2,
    },
    FittingEntry {
        fitting: Fitting::BallValveOpen,
        canonical_id: "ball_valve_open",
        display_name: "Open ball valve",
        aliases: &["ball valve"],
        k: 0.1,
    },
    FittingEntry {
        fitting: Fitting::CheckValve,
        canonical_id: "check_valve",
        display_name: "Check valve",
        aliases: &[],
        k: 2.5,
    },
    FittingEntry {
        fitting: Fitting::Elbow90,
        canonical_id: "elbow_90",
        display_name: "90° elbow",
        aliases: &["90 elbow", "elbow 90"],
        k: 0.9,
    },
    FittingEntry {
        fitting: Fitting::Elbow45,
        canonical_id: "elbow_45",
        display_name: "45° elbow",
        aliases: &["45 elbow", "elbow 45"],
        k: 0.4,
    },
    FittingEntry {
        fitting: Fitting::TeeRun,
        canonical_id: "tee_run",
        display_name: "Tee (through)",
        aliases: &["tee through", "tee_through"],
        k: 0.6,
    },
    FittingEntry {
        fitting: Fitting::TeeBranch,
        canonical_id: "tee_branch",
        display_name: "Tee (branch)",
        aliases: &["tee branch"],
        k: 1.8,
    },
    FittingEntry {
        fitting: Fitting::Entrance,
        canonical_id: "entrance",
        display_name: "Normal entrance",
        aliases: &["normal entrance"],
        k: 0.5,
    },
    FittingEntry {
        fitting: Fitting::Exit,
        canonical_id: "exit",
        display_name: "Pipe exit",
        aliases: &["pipe exit"],
        k: 1.0,
    },
];

pub fn fitting_table() -> &'static [FittingEntry] {
    &FITTING_TABLE
}

/// Find the table entry for a fitting label.
pub fn lookup(label: &str) -> Option<&'static FittingEntry> {
    FITTING_TABLE.iter().find(|entry| entry.matches(label))
}

impl Fitting {
    pub fn from_label(label: &str) -> Option<Self> {
        lookup(label).map(|entry| entry.fitting)
    }

    pub fn k(self) -> f64 {
        FITTING_TABLE
            .iter()
            .find(|entry| entry.fitting == self)
            .map_or(0.0, |entry| entry.k)
    }
}

/// Loss coefficient for a label; unknown labels give 0.
pub fn k_coefficient(label: &str) -> f64 {
    lookup(label).map_or(0.0, |entry| entry.k)
}

/// Sum of loss coefficients over a fitting list.
pub fn total_k<S: AsRef<str>>(labels: &[S]) -> f64 {
    labels.iter().map(|l| k_coefficient(l.as_ref())).sum()
}

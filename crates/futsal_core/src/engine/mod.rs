pub mod arbitration; // Possession, tackle, switch, goalkeeper
pub mod config; // Tuning configuration (constructor parameters)
pub mod match_flow; // Phase state machine, clock, score, kickoff, celebration
pub mod timestep;

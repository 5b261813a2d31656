pub mod journey_planner;

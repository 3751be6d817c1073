mod scripted_rng;

pub use scripted_rng::ScriptedRng;

//=====================================================================
// Scripted variate source for deterministic sampling tests. Feeding
// a fixed sequence of variates into a sampling call makes the call
// referentially transparent, so tests can assert exact outcomes
// instead of statistics.
//=====================================================================
pub struct ScriptedRng {
    values: Vec<f64>,
    index: usize,
}

impl ScriptedRng {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, index: 0 }
    }

    pub fn next_variate(&mut self) -> f64 {
        if self.index >= self.values.len() {
            panic!("ScriptedRng: ran out of values to return");
        }
        let value = self.values[self.index];
        self.index += 1;
        value
    }
}

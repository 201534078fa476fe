use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WindowError {
    #[error("window start {start_mz} must be less than window stop {stop_mz}")]
    EmptyRange { start_mz: f64, stop_mz: f64 },
    #[error("window bounds must be finite, got ({start_mz}, {stop_mz})")]
    NotFinite { start_mz: f64, stop_mz: f64 },
    #[error("{number_of_observations} observations in a window, but only {total_number_of_observations} in total")]
    ObservationsExceedTotal { number_of_observations: usize, total_number_of_observations: usize }
}

/// Isolation window, open on both ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MzWindow {
    start_mz: f64,
    stop_mz: f64
}

impl MzWindow {
    pub fn new(start_mz: f64, stop_mz: f64) -> Result<Self, WindowError> {
        if !start_mz.is_finite() || !stop_mz.is_finite() {
            return Err(WindowError::NotFinite { start_mz, stop_mz });
        }
        if start_mz >= stop_mz {
            return Err(WindowError::EmptyRange { start_mz, stop_mz });
        }
        return Ok(Self {
            start_mz: start_mz,
            stop_mz: stop_mz
        });
    }

    pub fn get_start_mz(&self) -> f64 {
        return self.start_mz;
    }

    pub fn get_stop_mz(&self) -> f64 {
        return self.stop_mz;
    }

    pub fn contains(&self, mz: f64) -> bool {
        return self.start_mz < mz && mz < self.stop_mz;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoverageBucket {
    window: MzWindow,
    number_of_observations: usize,
    total_number_of_observations: usize
}

impl CoverageBucket {
    pub fn new(window: MzWindow, number_of_observations: usize, total_number_of_observations: usize) -> Result<Self, WindowError> {
        if number_of_observations > total_number_of_observations {
            return Err(WindowError::ObservationsExceedTotal { number_of_observations, total_number_of_observations });
        }
        return Ok(Self {
            window: window,
            number_of_observations: number_of_observations,
            total_number_of_observations: total_number_of_observations
        });
    }

    pub fn get_start_mz(&self) -> f64 {
        return self.window.get_start_mz();
    }

    pub fn get_stop_mz(&self) -> f64 {
        return self.window.get_stop_mz();
    }

    pub fn get_number_of_observations(&self) -> usize {
        return self.number_of_observations;
    }

    pub fn get_total_number_of_observations(&self) -> usize {
        return self.total_number_of_observations;
    }

    /// Share of all observations inside this window, 0.0 if there were no observations at all.
    pub fn get_fraction(&self) -> f64 {
        if self.total_number_of_observations == 0 {
            return 0.0;
        }
        return self.number_of_observations as f64 / self.total_number_of_observations as f64;
    }
}

use std::sync::Arc;

use log::debug;

use crate::{
    clock::{Clock, SystemClock},
    schema::TimeResponse,
    zone::Zone,
};

#[derive(Clone)]
pub struct TimeService {
    clock: Arc<dyn Clock>,
}

impl Default for TimeService {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

impl TimeService {
    pub fn new(clock: impl Clock + 'static) -> Self {
        Self {
            clock: Arc::new(clock),
        }
    }

    pub fn get_time(&self, zone: Zone) -> TimeResponse {
        let response = TimeResponse::at(self.clock.now(), zone);
        debug!("{zone}: {}", response.datetime());
        response
    }

    pub fn get_jst_time(&self) -> TimeResponse {
        self.get_time(Zone::Jst)
    }

    pub fn get_utc_time(&self) -> TimeResponse {
        self.get_time(Zone::Utc)
    }
}

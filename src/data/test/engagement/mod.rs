use crate::data::engagement::EngagementLedger;

mod record_eligible_message;
mod snapshot;

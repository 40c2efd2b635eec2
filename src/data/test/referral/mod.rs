use crate::data::referral::ReferralLedger;

mod record_referral;
mod snapshot;

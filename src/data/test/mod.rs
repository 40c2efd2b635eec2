mod engagement;
mod message_state;
mod referral;
mod voice;

pub mod use_campaigns;

//! Platform-wide constants: network endpoint, fee recipients, fee schedule
//! and the terms of service shown before play.

use crate::address::TokenAddress;
use crate::error::ConfigError;

/// Environment variable that overrides [`DEFAULT_RPC_ENDPOINT`].
pub const RPC_ENDPOINT_ENV: &str = "RPC_ENDPOINT";
/// Public mainnet RPC, used when no endpoint is configured.
pub const DEFAULT_RPC_ENDPOINT: &str = "https://api.mainnet-beta.solana.com";

/// Address that receives creator fees for plays on this platform.
pub const PLATFORM_CREATOR_ADDRESS: &str = "6o1iE4cKQcjW4UFd4vn35r43qD9LjNDhPGNUMBuS8ocZ";

/// Explorer linked from the recent plays list.
pub const EXPLORER_URL: &str = "https://explorer.gamba.so";

/// Host shown in the share dialog.
pub const PLATFORM_SHARABLE_URL: &str = "play.gamba.so";

/// Whether a user may revoke an invite after accepting it.
pub const PLATFORM_ALLOW_REFERRER_REMOVAL: bool = true;

/// Upper bound the protocol accepts for the creator fee.
pub const MAX_CREATOR_FEE: f64 = 0.07;

/// Fee schedule, expressed as fractions of the wager.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeeSchedule {
    pub creator: f64,
    pub multiplayer: f64,
    /// Platform wide, not specific to the jackpot game.
    pub jackpot: f64,
    pub referral: f64,
}

pub const PLATFORM_FEES: FeeSchedule = FeeSchedule {
    creator: 0.01,
    multiplayer: 0.015,
    jackpot: 0.001,
    referral: 0.0025,
};

impl FeeSchedule {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("creator fee", self.creator),
            ("multiplayer fee", self.multiplayer),
            ("jackpot fee", self.jackpot),
            ("referral fee", self.referral),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::FeeOutOfRange { name, value });
            }
        }
        if self.creator > MAX_CREATOR_FEE {
            return Err(ConfigError::FeeAboveCap {
                name: "creator fee",
                value: self.creator,
                max: MAX_CREATOR_FEE,
            });
        }
        Ok(())
    }
}

pub fn creator_address() -> TokenAddress {
    TokenAddress::from_static(PLATFORM_CREATOR_ADDRESS)
}

/// HTML the user must accept before continuing.
pub const TOS_HTML: &str = r#"
  <p><b>1. Thou shalt be 18 years or older to enter.</b></p>
  <p><b>2. Thou shalt obey the laws of thy land.</b></p>
  <p><b>3. Thou shalt acknowledge the risks; fortune is never guaranteed.</b></p>
  <p><b>4. Thou shalt accept games as they are, with randomness divine.</b></p>
  <p><b>5. Thou shalt not hold us liable for losses or damages.</b></p>
  <p><b>6. Thou shalt know this is not a licensed casino, but a simulation for entertainment.</b></p>
  <p><b>7. Thou shalt play fairly and honor transparency.</b></p>
  <p><b>8. Thou shalt respect thy privacy and data.</b></p>
  <p><b>9. Thou shalt play responsibly and seek help if needed.</b></p>
  <p><b>10. Thou shalt enjoy the games in the spirit of fun and community.</b></p>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_fees_are_valid() {
        PLATFORM_FEES.validate().unwrap();
    }

    #[test]
    fn creator_fee_cap_is_enforced() {
        let fees = FeeSchedule {
            creator: 0.08,
            ..PLATFORM_FEES
        };
        assert!(matches!(
            fees.validate(),
            Err(ConfigError::FeeAboveCap { name: "creator fee", .. })
        ));
    }

    #[test]
    fn negative_fee_is_rejected() {
        let fees = FeeSchedule {
            referral: -0.1,
            ..PLATFORM_FEES
        };
        assert!(matches!(
            fees.validate(),
            Err(ConfigError::FeeOutOfRange { name: "referral fee", .. })
        ));
    }

    #[test]
    fn creator_address_parses() {
        assert_eq!(creator_address().as_str(), PLATFORM_CREATOR_ADDRESS);
    }

    #[test]
    fn terms_list_ten_commandments() {
        assert_eq!(TOS_HTML.matches("<p>").count(), 10);
    }
}

//! Test fixtures for consistent test setup

use hass_lights_skill::SkillConfig;
use rstest::*;

use super::hub_mock::TEST_TOKEN;

/// Skill configuration pointing to a mock hub
#[fixture]
pub fn test_skill_config(
    #[default("http://localhost:8123")] hub_url: &str,
    #[default(false)] enable_confirmation: bool,
) -> SkillConfig {
    let mut config = SkillConfig::new(hub_url.parse().expect("Valid URL"), TEST_TOKEN);
    config.enable_confirmation = enable_confirmation;
    config.confirmation_success = "Erledigt".to_string();
    config.confirmation_failure = "Hat nicht geklappt".to_string();
    config
}

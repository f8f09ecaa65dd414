//! Landing widget commands.

#![allow(clippy::print_stdout)]

use fiber_x_storefront::config::StorefrontConfig;
use fiber_x_storefront::error::AppError;
use fiber_x_storefront::landing::{
    Accordion, LandingConfig, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, SECTION_ROOT_MARGIN,
    SECTION_THRESHOLDS, splash,
};

/// Print the accordion panels and widget settings, optionally replaying
/// panel toggles.
pub fn show(config: &StorefrontConfig, toggles: &[String]) -> Result<(), AppError> {
    let landing = LandingConfig::load_or_default(config.landing_config.as_deref())?;

    println!("Accordion panels:");
    for panel in &landing.panels {
        let image = panel
            .image
            .as_ref()
            .map_or("(default image)", |image| image.src.as_str());
        println!("  {:<12} {:<36} {image}", panel.id, panel.label);
    }
    println!("  default image: {}", landing.default_image.src);

    println!(
        "Splash: {} ms display, {} ms exit, loaded after {} ms",
        splash::SPLASH_DISPLAY.as_millis(),
        splash::SPLASH_EXIT.as_millis(),
        splash::LOADED_DELAY.as_millis()
    );
    println!("Section tracking: margin {SECTION_ROOT_MARGIN:?}, thresholds {SECTION_THRESHOLDS:?}");
    println!("Reveal: margin {REVEAL_ROOT_MARGIN:?}, threshold {REVEAL_THRESHOLD}");

    if !toggles.is_empty() {
        println!("Toggles:");
        let mut accordion = Accordion::new(landing);
        for line in replay_toggles(&mut accordion, toggles) {
            println!("  {line}");
        }
    }
    Ok(())
}

fn replay_toggles(accordion: &mut Accordion, toggles: &[String]) -> Vec<String> {
    toggles
        .iter()
        .map(|id| match accordion.toggle(id) {
            Some(toggle) => format!(
                "{id}: {} -> {}",
                if toggle.expanded { "expanded" } else { "collapsed" },
                toggle.image.src
            ),
            None => format!("{id}: unknown panel"),
        })
        .collect()
}

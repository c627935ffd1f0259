use super::*;

const FACTORS: ParallaxFactors = ParallaxFactors { gradient: 0.3, particles: 0.15 };

#[test]
fn layers_move_at_their_own_speed() {
    let effects = parallax_effects(200.0, 900.0, FACTORS);
    assert_eq!(
        effects,
        vec![
            Effect::SetStyle(Target::HeroGradient, "transform", "translateY(60px)".to_owned()),
            Effect::SetStyle(Target::HeroParticles, "transform", "translateY(30px)".to_owned()),
        ]
    );
}

#[test]
fn top_of_page_is_untranslated() {
    let effects = parallax_effects(0.0, 900.0, FACTORS);
    assert_eq!(effects[0], Effect::SetStyle(Target::HeroGradient, "transform", "translateY(0px)".to_owned()));
}

#[test]
fn nothing_written_once_hero_is_past() {
    assert!(parallax_effects(900.0, 900.0, FACTORS).is_empty());
    assert!(parallax_effects(2000.0, 900.0, FACTORS).is_empty());
}

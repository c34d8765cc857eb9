use postcraft::agent::persona::Persona;

#[test]
fn neutral_directive_is_empty() {
    assert_eq!(Persona::Neutral.directive(), "");
}

#[test]
fn other_personas_have_distinct_directives() {
    let directives: Vec<&str> = Persona::ALL.iter().skip(1).map(|p| p.directive()).collect();

    assert!(directives.iter().all(|d| !d.is_empty()));
    for (i, a) in directives.iter().enumerate() {
        for b in directives.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn ids_round_trip() {
    for persona in Persona::ALL {
        assert_eq!(Persona::from_id(persona.id()), persona);
    }
}

#[test]
fn unknown_or_blank_ids_resolve_to_neutral() {
    assert_eq!(Persona::from_id("space-cowboy"), Persona::Neutral);
    assert_eq!(Persona::from_id(""), Persona::Neutral);
    assert_eq!(Persona::from("   "), Persona::Neutral);
}

#[test]
fn character_aliases_are_accepted() {
    assert_eq!(Persona::from_id("ethan-hunt"), Persona::ActionOriented);
    assert_eq!(Persona::from_id("Iron-Man"), Persona::Innovative);
    assert_eq!(Persona::from_id("mike-ross"), Persona::Analytical);
    assert_eq!(Persona::from_id(" harvey-specter "), Persona::Executive);
}

#[test]
fn serde_uses_ids() {
    let json = serde_json::to_string(&Persona::ActionOriented).expect("serialize persona");
    assert_eq!(json, "\"action-oriented\"");

    let parsed: Persona = serde_json::from_str("\"not-a-persona\"").expect("deserialize persona");
    assert_eq!(parsed, Persona::Neutral);
}

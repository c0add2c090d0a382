use super::*;

#[test]
fn split_roles_takes_one_role_per_line() {
    assert_eq!(
        split_roles("Software Engineer\nOpen Source Maintainer"),
        ["Software Engineer", "Open Source Maintainer"]
    );
}

#[test]
fn split_roles_trims_and_drops_blank_lines() {
    assert_eq!(split_roles("  Engineer  \n\n   \nWriter\n"), ["Engineer", "Writer"]);
    assert!(split_roles("").is_empty());
}

#[test]
fn hero_profile_round_trips_through_json() {
    let profile = HeroProfile {
        name: "Ada".into(),
        roles: vec!["Engineer".into(), "Writer".into()],
        description: "Hello".into(),
        linkedin_url: "https://linkedin.com/in/ada".into(),
        email: "ada@example.com".into(),
        resume_url: String::new(),
        profile_image_url: String::new(),
    };
    let json = serde_json::to_string(&profile).unwrap();
    let back: HeroProfile = serde_json::from_str(&json).unwrap();
    assert_eq!(back, profile);
}

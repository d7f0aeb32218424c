//! Roster loading and plain-text rendering.
//!
//! A roster is a JSON array of people whose hobbies are plain labels.

use kin_core::{KinError, KinResult, Person};
use std::path::Path;

pub type Roster = Vec<Person<String>>;

/// Read and decode a roster file.
pub fn load(path: &Path) -> KinResult<Roster> {
    if path.as_os_str().is_empty() {
        return Err(KinError::InvalidInput("roster path is empty".into()));
    }

    let text = std::fs::read_to_string(path)?;
    let people = parse(&text)?;

    tracing::info!(path = %path.display(), people = people.len(), "loaded roster");
    Ok(people)
}

/// Decode a roster from JSON text.
pub fn parse(text: &str) -> KinResult<Roster> {
    serde_json::from_str(text).map_err(|e| KinError::Decode(e.to_string()))
}

/// One block per person, followed by a count line.
pub fn render(people: &[Person<String>]) -> String {
    let mut out = String::new();

    for person in people {
        let addr = person.address();
        out.push_str(&format!("{}, {}\n", person.second_name(), person.first_name()));
        out.push_str(&format!(
            "  {} {}, {} {}\n",
            addr.street(),
            addr.house_number(),
            addr.postcode(),
            addr.city()
        ));

        if person.hobbies().is_empty() {
            out.push_str("  hobbies: -\n");
        } else {
            out.push_str(&format!("  hobbies: {}\n", person.hobbies().join(", ")));
        }
    }

    let noun = if people.len() == 1 { "person" } else { "people" };
    out.push_str(&format!("{} {}\n", people.len(), noun));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use kin_core::Address;
    use tempfile::TempDir;

    const ROSTER: &str = r#"[
        {
            "first_name": "Jane",
            "second_name": "Doe",
            "address": {"street": "Main St", "house_number": 12, "postcode": "90210", "city": "Springfield"},
            "hobbies": []
        },
        {
            "first_name": "John",
            "second_name": "Roe",
            "address": {"street": "Elm Rd", "house_number": 3, "postcode": "10115", "city": "Berlin"},
            "hobbies": ["chess", "rowing"]
        }
    ]"#;

    #[test]
    fn parses_people_in_file_order() {
        let people = parse(ROSTER).unwrap();

        assert_eq!(people.len(), 2);
        assert_eq!(people[0].first_name(), "Jane");
        assert_eq!(
            people[0].address(),
            &Address::new("Main St", 12, "90210", "Springfield")
        );
        assert!(people[0].hobbies().is_empty());
        assert_eq!(people[1].hobbies(), &["chess", "rowing"]);
    }

    #[test]
    fn malformed_roster_is_a_decode_error() {
        let err = parse(r#"{"first_name": "Jane"}"#).unwrap_err();
        assert!(matches!(err, KinError::Decode(_)));

        let err = parse("[{").unwrap_err();
        assert!(matches!(err, KinError::Decode(_)));
    }

    #[test]
    fn empty_array_is_an_empty_roster() {
        assert!(parse("[]").unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load(Path::new("/nonexistent/kin/roster.json")).unwrap_err();
        assert!(matches!(err, KinError::Io(_)));
    }

    #[test]
    fn empty_path_is_rejected() {
        let err = load(Path::new("")).unwrap_err();
        assert!(matches!(err, KinError::InvalidInput(_)));
    }

    #[test]
    fn load_reads_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("roster.json");
        std::fs::write(&path, ROSTER).unwrap();

        let people = load(&path).unwrap();

        assert_eq!(people.len(), 2);
        assert_eq!(people[1].address().city(), "Berlin");
    }

    #[test]
    fn render_lists_each_person() {
        let people = parse(ROSTER).unwrap();
        let text = render(&people);

        assert_eq!(
            text,
            "Doe, Jane\n\
             \x20 Main St 12, 90210 Springfield\n\
             \x20 hobbies: -\n\
             Roe, John\n\
             \x20 Elm Rd 3, 10115 Berlin\n\
             \x20 hobbies: chess, rowing\n\
             2 people\n"
        );
    }

    #[test]
    fn render_empty_roster() {
        assert_eq!(render(&[]), "0 people\n");
    }
}

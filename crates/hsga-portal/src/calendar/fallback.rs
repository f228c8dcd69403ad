use chrono::NaiveDate;

use super::domain::CalendarEvent;

const EVENTS_2026: [(u32, u32, &str, &str); 21] = [
    (1, 12, "National Youth Day", "Programs on youth empowerment, leadership workshops, and rallies"),
    (1, 26, "Republic Day", "Flag hoisting, march past & parade at schools and colleges"),
    (2, 22, "World Scout Day", "Baden Powell Birthday celebration – scouting programs"),
    (2, 28, "National Science Day", "Science exhibitions, workshops, and innovation challenges"),
    (3, 4, "National Safety Day", "Awareness programs on industrial safety & disaster management"),
    (3, 8, "World Women’s Day", "Women’s Day programs conducted by Guides (Girls)"),
    (4, 7, "World Health Day", "Health awareness campaigns, blood donation & medical camps"),
    (5, 11, "Mother’s Day", "Motivational classes on parental relations, essay writing, debates"),
    (5, 31, "Anti-Tobacco Day", "Rallies and awareness campaigns on usage & ban of tobacco"),
    (6, 5, "World Environment Day", "Plantation, Clean & Green, Swachh Bharat programs"),
    (6, 21, "World Yoga Day", "Yoga events highlighting the necessity of yoga"),
    (6, 26, "Intl Day Against Drug Abuse", "Anti-drug awareness campaigns, rallies, and workshops"),
    (8, 15, "Indian Independence Day", "Flag hoisting, parades, pyramids & independence-related events"),
    (9, 5, "Teachers’ Day", "Teachers’ Day celebrations"),
    (9, 16, "World Ozone Day", "Awareness programs on “Save the Earth”"),
    (10, 2, "Gandhi Jayanti", "Campaigns & competitions on Gandhiji’s role in freedom struggle"),
    (10, 21, "Police Commemoration Day", "Prayers for police officers who sacrificed their lives"),
    (11, 14, "Children’s Day", "Children’s Day programs, games, sports & events"),
    (11, 26, "HSGA Formation Day", "Scouts & Guides programs, events, pyramids & HSGA scout flag hoisting"),
    (12, 1, "World AIDS Day", "Health & medical camps, hospital service & HIV/AIDS awareness"),
    (12, 10, "Human Rights Day", "Rallies and motivational classes on human rights"),
];

/// Built-in 2026 circular, shown on the public calendar alongside stored events.
pub fn fallback_events() -> Vec<CalendarEvent> {
    EVENTS_2026
        .iter()
        .filter_map(|(month, day, title, description)| {
            NaiveDate::from_ymd_opt(2026, *month, *day).map(|date| CalendarEvent {
                id: None,
                title: (*title).to_string(),
                date,
                description: Some((*description).to_string()),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_circular_entry_is_a_valid_2026_date() {
        let events = fallback_events();
        assert_eq!(events.len(), EVENTS_2026.len());
        assert!(events.iter().all(|event| event.id.is_none()));
        assert!(events.windows(2).all(|pair| pair[0].date <= pair[1].date));
    }
}

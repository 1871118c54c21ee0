//! Unit tests for statistics API payload types

use super::*;
use serde_json::json;

fn lebron_json() -> serde_json::Value {
    json!({
        "id": 237,
        "first_name": "LeBron",
        "last_name": "James",
        "position": "F",
        "height": "6-9",
        "weight": "250",
        "jersey_number": "23",
        "college": "St. Vincent-St. Mary HS (OH)",
        "country": "USA",
        "draft_year": 2003,
        "draft_round": 1,
        "draft_number": 1,
        "team": {
            "id": 14,
            "conference": "West",
            "division": "Pacific",
            "city": "Los Angeles",
            "name": "Lakers",
            "full_name": "Los Angeles Lakers",
            "abbreviation": "LAL"
        }
    })
}

#[cfg(test)]
mod player_tests {
    use super::*;

    #[test]
    fn test_player_deserialization() {
        let player: Player = serde_json::from_value(lebron_json()).unwrap();

        assert_eq!(player.id, PlayerId::new(237));
        assert_eq!(player.full_name(), "LeBron James");
        assert_eq!(player.team_name(), "Los Angeles Lakers");
        assert_eq!(player.position_label(), "F");
        assert_eq!(player.draft_year, Some(2003));
        assert_eq!(player.team.as_ref().unwrap().abbreviation, "LAL");
    }

    #[test]
    fn test_player_minimal_record() {
        // Historic players come back with nulls and blank positions
        let json = json!({
            "id": 15,
            "first_name": "Giannis",
            "last_name": "Antetokounmpo",
            "position": "",
            "height": null,
            "weight": null,
            "team": null
        });

        let player: Player = serde_json::from_value(json).unwrap();
        assert_eq!(player.position_label(), "N/A");
        assert_eq!(player.team_name(), "N/A");
        assert!(player.height.is_none());
        assert!(player.college.is_none());
    }

    #[test]
    fn test_player_missing_name_is_rejected() {
        let json = json!({ "id": 1, "last_name": "Nobody" });
        assert!(serde_json::from_value::<Player>(json).is_err());
    }

    #[test]
    fn test_list_envelope_ignores_cursor_meta() {
        let json = json!({
            "data": [lebron_json()],
            "meta": { "next_cursor": 238, "per_page": 25 }
        });

        let envelope: ListEnvelope<Player> = serde_json::from_value(json).unwrap();
        assert_eq!(envelope.data.len(), 1);
    }

    #[test]
    fn test_list_envelope_without_data_is_rejected() {
        let json = json!({ "error": "Unauthorized" });
        assert!(serde_json::from_value::<ListEnvelope<Player>>(json).is_err());
    }

    #[test]
    fn test_item_envelope() {
        let json = json!({ "data": lebron_json() });
        let envelope: ItemEnvelope<Player> = serde_json::from_value(json).unwrap();
        assert_eq!(envelope.data.last_name, "James");
    }
}

#[cfg(test)]
mod season_averages_tests {
    use super::*;

    #[test]
    fn test_season_averages_deserialization() {
        let json = json!({
            "games_played": 72,
            "player_id": 15,
            "season": 2019,
            "min": "34:18",
            "fgm": 10.9,
            "fga": 19.7,
            "fg3m": 1.4,
            "fg3a": 4.7,
            "ftm": 6.3,
            "fta": 10.5,
            "oreb": 2.2,
            "dreb": 11.4,
            "reb": 13.6,
            "ast": 5.6,
            "stl": 1.0,
            "blk": 1.0,
            "turnover": 3.7,
            "pf": 3.1,
            "pts": 29.5,
            "fg_pct": 0.553,
            "fg3_pct": 0.304,
            "ft_pct": 0.633
        });

        let stats: SeasonAverages = serde_json::from_value(json).unwrap();
        assert_eq!(stats.player_id, PlayerId::new(15));
        assert_eq!(stats.season, Season::new(2019));
        assert_eq!(stats.games_played, Some(72));
        assert_eq!(stats.pts, Some(29.5));
    }

    #[test]
    fn test_stat_lines_formatting() {
        let json = json!({
            "player_id": 15,
            "season": 2019,
            "pts": 29.456,
            "fg_pct": 0.5531,
            "ast": null
        });

        let stats: SeasonAverages = serde_json::from_value(json).unwrap();
        let lines = stats.stat_lines();

        let get = |label: &str| {
            lines
                .iter()
                .find(|(l, _)| *l == label)
                .map(|(_, v)| v.clone())
                .unwrap()
        };
        assert_eq!(get("Points"), "29.5");
        assert_eq!(get("Field goal %"), "0.553");
        assert_eq!(get("Assists"), "-");
        assert_eq!(get("Games played"), "-");
        assert_eq!(get("Minutes"), "-");
    }

    #[test]
    fn test_stat_lines_order_starts_with_games() {
        let stats: SeasonAverages =
            serde_json::from_value(json!({ "player_id": 1, "season": 2020 })).unwrap();
        let lines = stats.stat_lines();

        assert_eq!(lines.first().unwrap().0, "Games played");
        assert_eq!(lines.last().unwrap().0, "Free throw %");
    }
}

    use super::*;

    #[test]
    fn app_list_flattens_to_string_keys() {
        let body: AppListResponse = serde_json::from_value(serde_json::json!({
            "applist": {
                "apps": [
                    { "appid": 440, "name": "Team Fortress 2" },
                    { "appid": 570, "name": "Dota 2" }
                ]
            }
        }))
        .expect("parse app list");

        let names = body.into_names();
        assert_eq!(names.len(), 2);
        assert_eq!(names.get("440").map(String::as_str), Some("Team Fortress 2"));
        assert_eq!(names.get("570").map(String::as_str), Some("Dota 2"));
    }

    #[test]
    fn duplicate_appids_keep_the_last_name() {
        let body: AppListResponse = serde_json::from_value(serde_json::json!({
            "applist": {
                "apps": [
                    { "appid": 10, "name": "Old Name" },
                    { "appid": 10, "name": "Counter-Strike" }
                ]
            }
        }))
        .expect("parse app list");

        let names = body.into_names();
        assert_eq!(names.get("10").map(String::as_str), Some("Counter-Strike"));
    }

    #[test]
    fn missing_apps_and_names_default_to_empty() {
        let empty: AppListResponse =
            serde_json::from_value(serde_json::json!({ "applist": {} })).expect("parse");
        assert!(empty.into_names().is_empty());

        let nameless: AppListResponse = serde_json::from_value(serde_json::json!({
            "applist": { "apps": [ { "appid": 7 } ] }
        }))
        .expect("parse");
        assert_eq!(nameless.into_names().get("7").map(String::as_str), Some(""));
    }

    #[test]
    fn malformed_body_is_rejected() {
        let parsed = serde_json::from_value::<AppListResponse>(serde_json::json!({
            "apps": []
        }));
        assert!(parsed.is_err());
    }

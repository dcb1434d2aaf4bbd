    use super::*;

    #[test]
    fn split_uses_the_first_underscore() {
        assert_eq!(
            split_appid("440_20200101123456_1.png"),
            Some(("440", "20200101123456_1.png"))
        );
        assert_eq!(split_appid("440.png"), None);
        assert_eq!(split_appid("_1.png"), None);
        assert_eq!(split_appid("440_"), None);
    }

    #[test]
    fn grouping_collects_files_per_appid() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let dir = tmp.path();
        for name in ["620_b.png", "440_a.png", "620_a.png", "loose.png", "440_c.jpg"] {
            fs::write(dir.join(name), b"x").expect("write");
        }

        let groups = group_by_appid(dir).expect("group");

        assert_eq!(groups.keys().collect::<Vec<_>>(), vec!["440", "620"]);
        assert_eq!(
            groups["440"],
            vec![PendingMove {
                source: dir.join("440_a.png"),
                target_name: "a.png".to_string(),
            }]
        );
        let targets = groups["620"]
            .iter()
            .map(|m| m.target_name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(targets, vec!["a.png", "b.png"]);
    }

use monarch_training::db::{keys, Database, KeyValueStore, KeyValueStoreExt};
use monarch_training::models::*;
use serde_json::json;
use speculate2::speculate;

speculate! {
    before {
        let db = Database::open_memory().expect("Failed to create in-memory database");
        db.migrate().expect("Failed to run migrations");
    }

    describe "get" {
        it "returns None for a missing key" {
            let value = db.get(keys::XP).expect("Query failed");
            assert!(value.is_none());
        }

        it "returns the value that was set" {
            db.set(keys::LEVEL, &json!(7)).expect("Write failed");
            let value = db.get(keys::LEVEL).expect("Query failed");
            assert_eq!(value, Some(json!(7)));
        }
    }

    describe "set" {
        it "overwrites the whole value" {
            db.set(keys::STATS, &json!({ "STR": 5, "AGI": 5 })).expect("Write failed");
            db.set(keys::STATS, &json!({ "STR": 9 })).expect("Write failed");

            let value = db.get(keys::STATS).expect("Query failed");
            assert_eq!(value, Some(json!({ "STR": 9 })));
        }

        it "keeps keys independent" {
            db.set(keys::XP, &json!(40)).expect("Write failed");
            db.set(keys::LEVEL, &json!(3)).expect("Write failed");

            assert_eq!(db.get(keys::XP).expect("Query failed"), Some(json!(40)));
            assert_eq!(db.keys().expect("Query failed"), vec!["level", "xp"]);
        }
    }

    describe "typed access" {
        it "stores quests with the widget field names" {
            let quests = QuestSet::new(vec![Quest::new("20 squats", 50)]);
            db.save(keys::QUESTS, &quests).expect("Write failed");

            let raw = db.get(keys::QUESTS).expect("Query failed");
            assert_eq!(raw, Some(json!([{ "desc": "20 squats", "done": false, "xp": 50 }])));
        }

        it "loads what it saved" {
            let mut quests = QuestSet::default();
            quests.quests[0].done = true;
            db.save(keys::QUESTS, &quests).expect("Write failed");

            let (loaded, found) = db
                .load_or(keys::QUESTS, QuestSet::new(vec![]))
                .expect("Query failed");
            assert!(found);
            assert_eq!(loaded, quests);
        }

        it "falls back to the default for a wrong shape" {
            db.set(keys::QUESTS, &json!({ "not": "a list" })).expect("Write failed");

            let (loaded, found) = db
                .load_or(keys::QUESTS, QuestSet::default())
                .expect("Query failed");
            assert!(found);
            assert_eq!(loaded, QuestSet::default());
        }
    }
}

mod file_backed {
    use super::*;

    #[test]
    fn values_survive_reopening() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("nested").join("monarch.db");

        {
            let db = Database::open(path.clone()).expect("Failed to open database");
            db.migrate().expect("Failed to migrate");
            db.set(keys::XP, &json!(120)).expect("Write failed");
        }

        let db = Database::open(path).expect("Failed to reopen database");
        db.migrate().expect("Failed to migrate again");
        assert_eq!(db.get(keys::XP).expect("Query failed"), Some(json!(120)));
    }
}

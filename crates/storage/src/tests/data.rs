use chrono::NaiveDate;
use workout_domain as domain;

pub const CATALOG_CSV: &str = "Bodypart,Exercises
Legs,\"Squat, Lunge\"
Back,\"Row, Deadlift, Pull Up\"
Core,Plank
";

pub static CATALOG: std::sync::LazyLock<domain::Catalog> = std::sync::LazyLock::new(|| {
    domain::Catalog::new(vec![
        domain::Bodypart::parse("Legs", "Squat, Lunge").unwrap(),
        domain::Bodypart::parse("Back", "Row, Deadlift, Pull Up").unwrap(),
        domain::Bodypart::parse("Core", "Plank").unwrap(),
    ])
});

pub const COMPLETIONS_CSV: &str = "WOY,WOD,Date,Exercise,Reps,Weight
6,0,2025-02-03,Row,8,60 lbs
7,0,2025-02-10,Plank,1,bodyweight
";

pub static COMPLETIONS: std::sync::LazyLock<Vec<domain::Completion>> =
    std::sync::LazyLock::new(|| {
        vec![
            completion(NaiveDate::from_ymd_opt(2025, 2, 3).unwrap(), "Row", 8, "60 lbs"),
            completion(
                NaiveDate::from_ymd_opt(2025, 2, 10).unwrap(),
                "Plank",
                1,
                "bodyweight",
            ),
        ]
    });

pub static COMPLETION: std::sync::LazyLock<domain::Completion> = std::sync::LazyLock::new(|| {
    completion(
        NaiveDate::from_ymd_opt(2025, 2, 12).unwrap(),
        "Squat",
        5,
        "100 lbs",
    )
});

pub static COMPLETION_2: std::sync::LazyLock<domain::Completion> =
    std::sync::LazyLock::new(|| {
        completion(
            NaiveDate::from_ymd_opt(2025, 2, 13).unwrap(),
            "Pull Up",
            6,
            "25 lbs",
        )
    });

pub static SESSION: std::sync::LazyLock<domain::Session> =
    std::sync::LazyLock::new(|| domain::Session {
        pending: vec![
            domain::Name::new("Lunge").unwrap(),
            domain::Name::new("Row").unwrap(),
        ],
        excluded: domain::Excluded::from([
            domain::Name::new("Squat").unwrap(),
            domain::Name::new("Lunge").unwrap(),
        ]),
    });

fn completion(date: NaiveDate, exercise: &str, reps: u32, weight: &str) -> domain::Completion {
    domain::Completion::new(
        date,
        domain::Name::new(exercise).unwrap(),
        domain::Reps::new(reps).unwrap(),
        domain::Weight::new(weight).unwrap(),
    )
}

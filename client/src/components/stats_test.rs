use super::*;

fn targets() -> DailyTargets {
    DailyTargets { bmr: 1500, tdee: 2325, calories: 1825, protein_g: 130, carbs_g: 172, fat_g: 51 }
}

#[test]
fn stat_rows_lead_with_calories() {
    let rows = stat_rows(&targets());
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0], StatRow { label: "Calories", value: "1825 kcal".to_owned() });
    assert_eq!(rows[3].value, "51 g");
}

#[test]
fn energy_note_mentions_bmr_and_maintenance() {
    assert_eq!(energy_note(&targets()), "BMR 1500 kcal · maintenance 2325 kcal");
}

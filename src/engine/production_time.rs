// ==========================================
// Учётная система БД мебельной компании - время изготовления
// ==========================================
// Назначение: суммарное время производства продукции по всем цехам,
// округление вверх до целого часа
// ==========================================

use crate::domain::workshop::WorkshopStage;

// ==========================================
// ProductionTimeCalculator - калькулятор времени
// ==========================================
pub struct ProductionTimeCalculator {
    // Без состояния
}

impl ProductionTimeCalculator {
    pub fn new() -> Self {
        Self {}
    }

    /// Суммарное время изготовления по этапам, округлённое вверх до часа
    ///
    /// Пустой список этапов даёт 0.
    pub fn total_hours(&self, stages: &[WorkshopStage]) -> i64 {
        let sum: f64 = stages.iter().map(|s| s.production_time_hours).sum();
        sum.ceil() as i64
    }
}

impl Default for ProductionTimeCalculator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stage(name: &str, hours: f64) -> WorkshopStage {
        WorkshopStage {
            workshop_name: name.to_string(),
            production_time_hours: hours,
        }
    }

    #[test]
    fn test_reference_fold() {
        // [2, 3.5, 1] -> ceil(6.5) = 7
        let calc = ProductionTimeCalculator::new();
        let stages = vec![
            stage("Цех раскроя", 2.0),
            stage("Цех сборки", 3.5),
            stage("Цех покраски", 1.0),
        ];
        assert_eq!(calc.total_hours(&stages), 7);
    }

    #[test]
    fn test_whole_hours_not_inflated() {
        let calc = ProductionTimeCalculator::new();
        let stages = vec![stage("Цех сборки", 3.0), stage("Цех покраски", 2.0)];
        assert_eq!(calc.total_hours(&stages), 5);
    }

    #[test]
    fn test_empty_stages() {
        let calc = ProductionTimeCalculator::new();
        assert_eq!(calc.total_hours(&[]), 0);
    }

    #[test]
    fn test_single_fractional_stage() {
        let calc = ProductionTimeCalculator::new();
        assert_eq!(calc.total_hours(&[stage("Цех сборки", 0.25)]), 1);
    }
}

// ==========================================
// Учётная система БД мебельной компании - расчёт потребности в сырье
// ==========================================
// Назначение: чистая формула расхода сырья на партию продукции
// Вход: коэффициент типа, процент потерь, количество, два габарита
// Выход: расход на единицу, с учётом потерь, итог с округлением вверх
// ==========================================

use serde::{Deserialize, Serialize};

/// Результат расчёта потребности в сырье
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialRequirement {
    /// Расход сырья на одну единицу продукции
    pub material_per_unit: f64,
    /// Расход на единицу с учётом потерь
    pub material_with_waste: f64,
    /// Итог на всю партию, целые единицы, округление вверх
    /// (закупка никогда не занижается)
    pub material_needed: i64,
}

// ==========================================
// MaterialCalculator - калькулятор сырья
// ==========================================
pub struct MaterialCalculator {
    // Калькулятор без состояния, поиск справочных значений
    // выполняет вызывающая сторона
}

impl MaterialCalculator {
    pub fn new() -> Self {
        Self {}
    }

    /// Рассчитать потребность в сырье
    ///
    /// # Параметры
    /// - `type_coefficient`: коэффициент типа продукции (положительный)
    /// - `waste_percentage`: доля потерь сырья, [0, 1)
    /// - `quantity`: количество продукции
    /// - `param1`, `param2`: параметры формы/габаритов
    ///
    /// # Возврат
    /// MaterialRequirement с промежуточными значениями и целым итогом
    ///
    /// Расчёт детерминирован и монотонно не убывает по каждому
    /// из пяти аргументов.
    pub fn calculate(
        &self,
        type_coefficient: f64,
        waste_percentage: f64,
        quantity: f64,
        param1: f64,
        param2: f64,
    ) -> MaterialRequirement {
        // Расход сырья на одну единицу продукции
        let material_per_unit = param1 * param2 * type_coefficient;

        // Учёт потерь материала
        let material_with_waste = material_per_unit * (1.0 + waste_percentage);

        // Итог на заданное количество, округление вверх
        let material_needed = (material_with_waste * quantity).ceil() as i64;

        MaterialRequirement {
            material_per_unit,
            material_with_waste,
            material_needed,
        }
    }
}

impl Default for MaterialCalculator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_scenario() {
        // c=1.5, w=0.1, q=10, p1=2, p2=3
        let calc = MaterialCalculator::new();
        let result = calc.calculate(1.5, 0.1, 10.0, 2.0, 3.0);

        assert_eq!(format!("{:.2}", result.material_per_unit), "9.00");
        assert_eq!(format!("{:.2}", result.material_with_waste), "9.90");
        assert_eq!(result.material_needed, 99);
    }

    #[test]
    fn test_reference_scenario_quantity_11() {
        // 9.9 * 11 = 108.9 -> 109
        let calc = MaterialCalculator::new();
        let result = calc.calculate(1.5, 0.1, 11.0, 2.0, 3.0);
        assert_eq!(result.material_needed, 109);
    }

    #[test]
    fn test_ceil_rounds_up_fraction() {
        let calc = MaterialCalculator::new();
        // 1 * 1 * 1 * 1.5 * 1 = 1.5 -> 2
        let result = calc.calculate(1.0, 0.5, 1.0, 1.0, 1.0);
        assert_eq!(result.material_needed, 2);
    }

    #[test]
    fn test_zero_waste() {
        let calc = MaterialCalculator::new();
        let result = calc.calculate(2.0, 0.0, 5.0, 1.0, 1.0);
        assert_eq!(result.material_per_unit, result.material_with_waste);
        assert_eq!(result.material_needed, 10);
    }

    #[test]
    fn test_monotonic_in_each_argument() {
        let calc = MaterialCalculator::new();
        let base = calc.calculate(1.5, 0.1, 10.0, 2.0, 3.0).material_needed;

        assert!(calc.calculate(1.6, 0.1, 10.0, 2.0, 3.0).material_needed >= base);
        assert!(calc.calculate(1.5, 0.2, 10.0, 2.0, 3.0).material_needed >= base);
        assert!(calc.calculate(1.5, 0.1, 11.0, 2.0, 3.0).material_needed >= base);
        assert!(calc.calculate(1.5, 0.1, 10.0, 2.5, 3.0).material_needed >= base);
        assert!(calc.calculate(1.5, 0.1, 10.0, 2.0, 3.5).material_needed >= base);
    }

    #[test]
    fn test_deterministic() {
        let calc = MaterialCalculator::new();
        let a = calc.calculate(3.5, 0.18, 7.0, 1.2, 0.8);
        let b = calc.calculate(3.5, 0.18, 7.0, 1.2, 0.8);
        assert_eq!(a, b);
    }
}

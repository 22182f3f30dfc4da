use crate::core::mean;
use crate::domain::model::Employee;
use crate::domain::report::{money, Section};
use std::collections::HashMap;

pub const HIGH_SALARY_THRESHOLD: f64 = 2000.0;
pub const DEFAULT_YOUNGEST_COUNT: usize = 2;

#[derive(Debug, Clone, Copy, Default)]
pub struct EmployeeAnalytics;

impl EmployeeAnalytics {
    pub fn new() -> Self {
        Self
    }

    pub fn high_salary_sorted_descending<'a>(&self, employees: &'a [Employee]) -> Vec<&'a Employee> {
        let mut high: Vec<&Employee> = employees
            .iter()
            .filter(|e| e.salary > HIGH_SALARY_THRESHOLD)
            .collect();
        high.sort_by(|a, b| b.salary.total_cmp(&a.salary));
        high
    }

    pub fn average_salary(&self, employees: &[Employee]) -> f64 {
        mean(employees.iter().map(|e| e.salary))
    }

    pub fn salary_sum_by_department<'a>(&self, employees: &'a [Employee]) -> HashMap<&'a str, f64> {
        let mut sums: HashMap<&str, f64> = HashMap::new();
        for employee in employees {
            *sums.entry(employee.department.as_str()).or_insert(0.0) += employee.salary;
        }
        sums
    }

    /// Names of the `n` youngest employees, youngest first; equal ages keep input order.
    pub fn youngest_names(&self, employees: &[Employee], n: usize) -> Vec<String> {
        let mut by_age: Vec<&Employee> = employees.iter().collect();
        by_age.sort_by_key(|e| e.age);
        by_age.into_iter().take(n).map(|e| e.name.clone()).collect()
    }

    pub fn section(&self, employees: &[Employee], youngest_count: usize) -> Section {
        tracing::debug!(
            "Building employee section from {} records (youngest: {})",
            employees.len(),
            youngest_count
        );

        let high = self
            .high_salary_sorted_descending(employees)
            .iter()
            .map(|e| format!("- {} ({}): {}", e.name, e.department, money(e.salary)))
            .collect();

        let mut sums: Vec<(&str, f64)> =
            self.salary_sum_by_department(employees).into_iter().collect();
        sums.sort_by(|a, b| a.0.cmp(b.0));
        let sums = sums
            .into_iter()
            .map(|(department, total)| format!("{}: {}", department, money(total)))
            .collect();

        let youngest = self
            .youngest_names(employees, youngest_count)
            .into_iter()
            .enumerate()
            .map(|(i, name)| format!("{}. {}", i + 1, name))
            .collect();

        Section::new("EMPLOYEE ANALYTICS")
            .entry("Employees earning above $2000 (by salary, descending)", high)
            .entry("Overall average salary", vec![money(self.average_salary(employees))])
            .entry("Salary total per department", sums)
            .entry(format!("The {youngest_count} youngest employees"), youngest)
    }
}

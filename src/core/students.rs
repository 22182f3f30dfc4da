use crate::core::mean;
use crate::domain::model::Student;
use crate::domain::report::Section;
use std::collections::HashMap;

pub const PASSING_SCORE: f64 = 7.0;
pub const TOP_COUNT: usize = 3;

/// Stateless queries over a list of students.
#[derive(Debug, Clone, Copy, Default)]
pub struct StudentAnalytics;

impl StudentAnalytics {
    pub fn new() -> Self {
        Self
    }

    /// Uppercased names of students scoring at least [`PASSING_SCORE`], in codepoint order.
    pub fn approved_sorted_names(&self, students: &[Student]) -> Vec<String> {
        let mut names: Vec<String> = students
            .iter()
            .filter(|s| s.score >= PASSING_SCORE)
            .map(|s| s.name.to_uppercase())
            .collect();
        names.sort();
        names
    }

    pub fn average_score(&self, students: &[Student]) -> f64 {
        mean(students.iter().map(|s| s.score))
    }

    /// Students keyed by course; each group keeps the input order.
    pub fn group_by_course<'a>(&self, students: &'a [Student]) -> HashMap<&'a str, Vec<&'a Student>> {
        let mut groups: HashMap<&str, Vec<&Student>> = HashMap::new();
        for student in students {
            groups.entry(student.course.as_str()).or_default().push(student);
        }
        groups
    }

    /// Best [`TOP_COUNT`] scores, highest first. Equal scores keep their input order.
    pub fn top3_by_score<'a>(&self, students: &'a [Student]) -> Vec<&'a Student> {
        let mut ranked: Vec<&Student> = students.iter().collect();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked.truncate(TOP_COUNT);
        ranked
    }

    pub fn section(&self, students: &[Student]) -> Section {
        tracing::debug!("Building student section from {} records", students.len());

        let approved = self
            .approved_sorted_names(students)
            .into_iter()
            .map(|name| format!("- {name}"))
            .collect();

        let average = vec![format!("Average: {:.2}", self.average_score(students))];

        let groups = self.group_by_course(students);
        let mut courses: Vec<&str> = groups.keys().copied().collect();
        courses.sort();
        let mut by_course = Vec::new();
        for course in courses {
            let members = &groups[course];
            by_course.push(format!("Course {}: {} students", course, members.len()));
            for s in members {
                by_course.push(format!("   - {} ({:.1})", s.name, s.score));
            }
        }

        let top = self
            .top3_by_score(students)
            .iter()
            .enumerate()
            .map(|(i, s)| format!("{}. {} - Score: {:.1}", i + 1, s.name, s.score))
            .collect();

        Section::new("STUDENT ANALYTICS")
            .entry("Approved students (score >= 7), uppercased and sorted", approved)
            .entry("Overall average score", average)
            .entry("Students grouped by course", by_course)
            .entry("Top 3 scores", top)
    }
}

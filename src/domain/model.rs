use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    pub score: f64,
    pub course: String,
}

impl Student {
    pub fn new(name: impl Into<String>, score: f64, course: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score,
            course: course.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: i32,
}

impl Product {
    pub fn new(name: impl Into<String>, category: impl Into<String>, price: f64, stock: i32) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            price,
            stock,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub pages: i32,
    pub price: f64,
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>, pages: i32, price: f64) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            pages,
            price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    pub department: String,
    pub salary: f64,
    pub age: i32,
}

impl Employee {
    pub fn new(name: impl Into<String>, department: impl Into<String>, salary: f64, age: i32) -> Self {
        Self {
            name: name.into(),
            department: department.into(),
            salary,
            age,
        }
    }
}

/// One collection of each record kind, as handed from a source to the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Datasets {
    pub students: Vec<Student>,
    pub products: Vec<Product>,
    pub books: Vec<Book>,
    pub employees: Vec<Employee>,
}

impl Datasets {
    pub fn total_records(&self) -> usize {
        self.students.len() + self.products.len() + self.books.len() + self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total_records() == 0
    }
}

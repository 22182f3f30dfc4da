//! Built-in demonstration datasets.

use super::model::{Book, Datasets, Employee, Product, Student};

impl Datasets {
    /// The fixed data the report runs on when no data directory is given.
    pub fn sample() -> Self {
        Self {
            students: sample_students(),
            products: sample_products(),
            books: sample_books(),
            employees: sample_employees(),
        }
    }
}

pub fn sample_students() -> Vec<Student> {
    vec![
        Student::new("Juan Perez", 8.5, "1A"),
        Student::new("Maria Garcia", 9.2, "1A"),
        Student::new("Carlos Lopez", 6.5, "1B"),
        Student::new("Ana Martinez", 7.8, "1A"),
        Student::new("Pedro Rodriguez", 5.5, "1B"),
        Student::new("Laura Fernandez", 9.5, "1C"),
        Student::new("Diego Sanchez", 7.0, "1B"),
        Student::new("Sofia Gonzalez", 8.0, "1C"),
    ]
}

pub fn sample_products() -> Vec<Product> {
    vec![
        Product::new("Laptop", "Electronics", 1200.0, 15),
        Product::new("Mouse", "Electronics", 25.0, 50),
        Product::new("Monitor", "Electronics", 350.0, 20),
        Product::new("Shirt", "Clothing", 45.0, 100),
        Product::new("Shoes", "Clothing", 120.0, 40),
        Product::new("Rice", "Food", 15.0, 200),
        Product::new("Oil", "Food", 30.0, 150),
    ]
}

pub fn sample_books() -> Vec<Book> {
    vec![
        Book::new("Cien Anos de Soledad", "Gabriel Garcia Marquez", 471, 45.0),
        Book::new("El Principito", "Antoine de Saint-Exupery", 96, 20.0),
        Book::new("Don Quijote", "Miguel de Cervantes", 863, 60.0),
        Book::new("1984", "George Orwell", 328, 35.0),
        Book::new("Rebelion en la Granja", "George Orwell", 144, 25.0),
        Book::new("Harry Potter y la Piedra Filosofal", "J.K. Rowling", 309, 42.0),
        Book::new("El Senor de los Anillos", "J.R.R. Tolkien", 1178, 80.0),
    ]
}

pub fn sample_employees() -> Vec<Employee> {
    vec![
        Employee::new("Juan Perez", "IT", 3500.0, 28),
        Employee::new("Maria Garcia", "IT", 4200.0, 32),
        Employee::new("Carlos Lopez", "Sales", 2800.0, 25),
        Employee::new("Ana Martinez", "Sales", 1800.0, 23),
        Employee::new("Pedro Rodriguez", "HR", 3000.0, 35),
        Employee::new("Laura Fernandez", "Finance", 3800.0, 29),
        Employee::new("Diego Sanchez", "IT", 3200.0, 26),
        Employee::new("Sofia Gonzalez", "Sales", 2500.0, 30),
    ]
}

//! Performance benchmarks for address book operations.
//!
//! These benchmarks measure how the core operations scale with book size:
//! - Bulk add (validation + duplicate check per insert)
//! - Lookup by name
//! - Sorting by name and by a single field
//! - Filtering by city or state

use address_book::{AddressBook, Contact, SortCriterion};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const SIZES: [usize; 3] = [100, 1_000, 10_000];

/// Build a proper-case name that passes validation, unique per index.
fn name_for(prefix: char, mut n: usize) -> String {
    let mut name = String::from(prefix);
    for _ in 0..4 {
        name.push((b'a' + (n % 26) as u8) as char);
        n /= 26;
    }
    name
}

fn sample_contacts(count: usize) -> Vec<Contact> {
    (0..count)
        .map(|i| {
            Contact::new(
                name_for('F', i),
                name_for('L', count - i),
                "Main Road",
                format!("City{}", i % 50),
                format!("State{}", i % 10),
                format!("{:05}", (i * 7919) % 100_000),
                "1234567890",
                format!("user{}@example.com", i),
            )
        })
        .collect()
}

fn populated_book(count: usize) -> AddressBook {
    let mut book = AddressBook::new();
    for contact in sample_contacts(count) {
        book.add_contact(contact).unwrap();
    }
    book
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_contacts");
    for size in SIZES {
        let contacts = sample_contacts(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &contacts, |b, contacts| {
            b.iter(|| {
                let mut book = AddressBook::new();
                for contact in contacts.iter().cloned() {
                    book.add_contact(contact).unwrap();
                }
                black_box(book.contact_count())
            });
        });
    }
    group.finish();
}

fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_contact_by_name");
    for size in SIZES {
        let book = populated_book(size);
        let target = book.contacts()[size / 2].clone();
        group.bench_with_input(BenchmarkId::from_parameter(size), &book, |b, book| {
            b.iter(|| {
                black_box(book.find_contact_by_name(&target.first_name, &target.last_name))
            });
        });
    }
    group.finish();
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");
    for size in SIZES {
        let book = populated_book(size);
        group.bench_with_input(BenchmarkId::new("by_name", size), &book, |b, book| {
            b.iter(|| {
                let mut book = book.clone();
                book.sort_contacts_alphabetically();
                black_box(book.contact_count())
            });
        });
        group.bench_with_input(BenchmarkId::new("by_zip", size), &book, |b, book| {
            b.iter(|| {
                let mut book = book.clone();
                book.sort_by(SortCriterion::Zip);
                black_box(book.contact_count())
            });
        });
    }
    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("contacts_by_city_or_state");
    for size in SIZES {
        let book = populated_book(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &book, |b, book| {
            b.iter(|| black_box(book.contact_count_by_city_or_state("State3")));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_add, bench_find, bench_sort, bench_filter);
criterion_main!(benches);

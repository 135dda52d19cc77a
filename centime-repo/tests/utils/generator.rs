use centime_repo::transaction_repo::{NewTransaction, TransactionKind};
use chrono::{DateTime, Utc};
use fake::faker::lorem::en::Sentence;
use fake::{Fake, Faker};
use rand::seq::SliceRandom;
use rust_decimal::Decimal;

trait Generator<T> {
    fn gen(&mut self) -> T;
}

struct Predefined<T> {
    values: Vec<T>,
    current_pos: usize,
}

impl<T> Predefined<T> {
    fn boxed(values: Vec<T>) -> Box<Predefined<T>> {
        Box::new(Predefined {
            values,
            current_pos: 0,
        })
    }
}

impl<T: Clone> Generator<T> for Predefined<T> {
    fn gen(&mut self) -> T {
        let v = self.values[self.current_pos].clone();
        self.current_pos += 1;
        v
    }
}

struct RandomSample<T> {
    values: Vec<T>,
}

impl<T> RandomSample<T> {
    fn boxed(values: Vec<T>) -> Box<RandomSample<T>> {
        Box::new(RandomSample { values })
    }
}

impl<T: Clone> Generator<T> for RandomSample<T> {
    fn gen(&mut self) -> T {
        self.values.choose(&mut rand::thread_rng()).unwrap().clone()
    }
}

struct FakeGenerator<F: Fake> {
    fake: F,
}

impl<F: Fake> FakeGenerator<F> {
    fn boxed(fake: F) -> Box<FakeGenerator<F>> {
        Box::new(FakeGenerator { fake })
    }
}

impl<T: fake::Dummy<F>, F> Generator<T> for FakeGenerator<F> {
    fn gen(&mut self) -> T {
        self.fake.fake()
    }
}

struct FakeAmount;

impl Generator<Decimal> for FakeAmount {
    fn gen(&mut self) -> Decimal {
        Decimal::new((1..100_000_000i64).fake(), 2)
    }
}

#[allow(dead_code)]
pub struct NewTransactionGenerator {
    kind_gen: Box<dyn Generator<TransactionKind>>,
    amnt_gen: Box<dyn Generator<Decimal>>,
    desc_gen: Box<dyn Generator<String>>,
    cat_gen: Box<dyn Generator<i64>>,
    date_gen: Box<dyn Generator<DateTime<Utc>>>,
    note_gen: Box<dyn Generator<Option<String>>>,
}

#[allow(dead_code)]
impl NewTransactionGenerator {
    pub fn with_kinds(mut self, kinds: Vec<TransactionKind>) -> NewTransactionGenerator {
        self.kind_gen = Predefined::boxed(kinds);
        self
    }

    pub fn with_amounts(mut self, amounts: Vec<Decimal>) -> NewTransactionGenerator {
        self.amnt_gen = Predefined::boxed(amounts);
        self
    }

    pub fn with_categories(mut self, category_ids: Vec<i64>) -> NewTransactionGenerator {
        self.cat_gen = Predefined::boxed(category_ids);
        self
    }

    pub fn with_dates(mut self, dates: Vec<DateTime<Utc>>) -> NewTransactionGenerator {
        self.date_gen = Predefined::boxed(dates);
        self
    }

    pub fn with_notes(mut self, notes: Vec<Option<&str>>) -> NewTransactionGenerator {
        let notes = notes
            .into_iter()
            .map(|n| n.map(|n| n.to_string()))
            .collect();
        self.note_gen = Predefined::boxed(notes);
        self
    }

    pub fn generate(&mut self) -> NewTransaction {
        NewTransaction::new(
            self.kind_gen.gen(),
            self.amnt_gen.gen(),
            self.desc_gen.gen(),
            self.cat_gen.gen(),
            self.date_gen.gen(),
            self.note_gen.gen(),
        )
    }

    pub fn generate_many(&mut self, count: usize) -> Vec<NewTransaction> {
        let mut vec = Vec::with_capacity(count);
        for _ in 0..count {
            vec.push(self.generate())
        }
        vec
    }
}

impl Default for NewTransactionGenerator {
    fn default() -> Self {
        NewTransactionGenerator {
            kind_gen: RandomSample::boxed(vec![
                TransactionKind::Income,
                TransactionKind::Expense,
            ]),
            amnt_gen: Box::new(FakeAmount),
            desc_gen: FakeGenerator::boxed(Sentence(3..8)),
            cat_gen: RandomSample::boxed(vec![1, 2, 3, 4, 5]),
            date_gen: FakeGenerator::boxed(Faker),
            note_gen: FakeGenerator::boxed(Sentence(5..10)),
        }
    }
}

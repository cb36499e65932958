use sequence_lib::collections::linked::OrderedSequence;
use sequence_lib::collections::traits::{Queue, Stack};

fn main() {
    println!("\n[OrderedSequence]\n");

    let mut seq = OrderedSequence::new();
    for i in 1..=4 {
        seq.push_back(i);
    }

    for value in &seq {
        println!("current node data: {value}");
    }
    println!("{seq}");

    println!("\n[Stack]\n");

    let cars = ["Ferrari", "Mercedes", "Red Bull", "McLaren", "Aston Martin"];
    let mut garage = OrderedSequence::new();

    for car in cars {
        garage.push(car);
        println!("Garage after push: {garage:?}");
    }

    while let Some(car) = garage.pop() {
        println!("Removed car: {car} | Garage after pop: {garage:?}");
    }

    println!("\n[Queue]\n");

    let mut pit_lane = OrderedSequence::new();
    pit_lane.enqueue("Hamilton");
    pit_lane.enqueue("Verstappen");
    pit_lane.enqueue("Leclerc");

    println!("Starting pit stop...");
    for driver in pit_lane.drain_front() {
        println!("Entering driver: {driver}");
    }
}

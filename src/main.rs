use redbud::tree::RbTree;

#[derive(Debug)]
struct Person {
    first: String,
    last: String,
}

fn person(first: &str, last: &str) -> Person {
    Person {
        first: first.to_string(),
        last: last.to_string(),
    }
}

fn main() {
    let mut registry: RbTree<String, Person> = RbTree::new();

    let people = [
        ("Qm3kVd91xPa+EknRwuLCtPTYhNzBzRfLbw", "Mara", "Ellison"),
        ("Ae7tJc20yNb+FlmSxvMDuQUZiOaCaSgMcx", "Theo", "Brandt"),
        ("Zr5nWf83zQc+GonTywNEvRVAjPbDbThNdy", "Iris", "Okafor"),
        ("Kp1mXg74aRd+HpoUzxOFwSWBkQcEcUiOez", "Dario", "Vance"),
        ("Bw9oYh65bSe+IqpVayPGxTXClRdFdVjPfa", "Noor", "Lindqvist"),
        ("Ct2pZi56cTf+JrqWbzQHyUYDmSeGeWkQgb", "Felix", "Arnaud"),
        ("Dv4qAj47dUg+KsrXcaRIzVZEnTfHfXlRhc", "Sana", "Petrov"),
    ];

    for (id, first, last) in people {
        registry.insert(id.to_string(), person(first, last)).unwrap();
    }

    println!("registry in id order:");
    for (id, person) in registry.iter() {
        println!("  {id}: {} {}", person.first, person.last);
    }

    let probe = "Kp1mXg74aRd+HpoUzxOFwSWBkQcEcUiOez".to_string();
    match registry.find(&probe) {
        Some(id) => {
            let found = registry.value(id).unwrap();
            println!("found {}: {} {}", probe, found.first, found.last);
            let (_, gone) = registry.remove(id).unwrap();
            println!("removed {} {}", gone.first, gone.last);
        }
        None => println!("{probe} not present"),
    }

    println!("{} people remain", registry.len());
}

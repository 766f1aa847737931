use probemap::{DoubleHashing, ProbeMap, ProbeMultiMap, QuadraticProbing, Result};

fn main() -> Result<()> {
    println!("=== Probe Strategy Demo ===\n");

    // Example 1: quadratic probing over power-of-two capacities
    demo_quadratic()?;

    // Example 2: double hashing over a prime capacity
    demo_double_hashing()?;

    // Example 3: duplicate keys in a multimap
    demo_duplicates()?;

    Ok(())
}

fn demo_quadratic() -> Result<()> {
    println!("1. Quadratic probing (c1 = 1, c2 = 2):");
    // an odd c1 with an even c2 visits every slot of a power-of-two table
    let mut map: ProbeMap<u32, u32, _, QuadraticProbing> =
        ProbeMap::with_probe(QuadraticProbing::new(1, 2));

    for i in 0..40 {
        map.insert(i, i * 3)?;
    }
    println!(
        "   {} entries over {} slots (load factor {:.2})",
        map.len(),
        map.capacity(),
        map.load_factor()
    );
    println!("   map[17] = {:?}", map.get(&17));
    println!();
    Ok(())
}

fn demo_double_hashing() -> Result<()> {
    println!("2. Double hashing (secondary prime 97):");
    // a prime capacity above the secondary prime keeps every step
    // coprime to it, so each chain covers the whole table
    let mut map: ProbeMap<String, u32, _, DoubleHashing> =
        ProbeMap::with_capacity_and_probe(101, DoubleHashing::new(97));

    for i in 0..60 {
        map.insert(format!("user-{i}"), i)?;
    }
    println!(
        "   {} entries over {} slots (load factor {:.2})",
        map.len(),
        map.capacity(),
        map.load_factor()
    );
    println!("   map[\"user-42\"] = {:?}", map.get("user-42"));
    println!();
    Ok(())
}

fn demo_duplicates() -> Result<()> {
    println!("3. Duplicate keys:");
    let mut tags: ProbeMultiMap<&str, &str> = ProbeMultiMap::default();

    for (topic, tag) in [
        ("rust", "ownership"),
        ("rust", "traits"),
        ("rust", "lifetimes"),
        ("probing", "linear"),
        ("probing", "quadratic"),
    ] {
        tags.insert(topic, tag)?;
    }

    println!("   'rust' has {} tags:", tags.count(&"rust"));
    for (_, tag) in tags.equal_range(&"rust") {
        println!("     - {tag}");
    }
    println!("   'probing' has {} tags", tags.count(&"probing"));
    Ok(())
}

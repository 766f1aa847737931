use probemap::{ProbeMap, Result};

fn main() -> Result<()> {
    println!("=== ProbeMap Demo ===\n");

    // Example 1: plain insert and lookup
    demo_insert_and_lookup()?;

    // Example 2: entry-based updates
    demo_entry_api()?;

    // Example 3: checked access and its error
    demo_checked_access();

    // Example 4: removal, tombstones and compaction
    demo_removal_and_rehash()?;

    Ok(())
}

fn demo_insert_and_lookup() -> Result<()> {
    println!("1. Insert and lookup:");
    let mut map: ProbeMap<u32, String> = ProbeMap::new();

    for (key, name) in [(1, "one"), (2, "two"), (3, "three")] {
        map.insert(key, name.to_string())?;
    }
    println!(
        "   {} entries over {} slots (load factor {:.2})",
        map.len(),
        map.capacity(),
        map.load_factor()
    );

    if let Some(value) = map.get(&2) {
        println!("   map[2] = '{value}'");
    }
    println!("   map contains 9: {}", map.contains_key(&9));
    println!();
    Ok(())
}

fn demo_entry_api() -> Result<()> {
    println!("2. Entry API:");
    let mut counts: ProbeMap<&str, u32> = ProbeMap::new();

    let words = ["the", "quick", "brown", "fox", "jumps", "over", "the", "lazy", "dog", "the"];
    for word in words {
        *counts.entry(word)?.or_insert(0) += 1;
    }

    for (word, count) in &counts {
        println!("   '{word}' seen {count} time(s)");
    }
    println!();
    Ok(())
}

fn demo_checked_access() {
    println!("3. Checked access:");
    let mut map: ProbeMap<u32, &str> = ProbeMap::new();
    map.insert(7, "seven").expect("empty table has room");

    match map.at(&7) {
        Ok(value) => println!("   at(7) -> '{value}'"),
        Err(err) => println!("   at(7) failed: {err}"),
    }
    match map.at(&10) {
        Ok(value) => println!("   at(10) -> '{value}'"),
        Err(err) => println!("   at(10) failed: {err}"),
    }
    println!();
}

fn demo_removal_and_rehash() -> Result<()> {
    println!("4. Removal, tombstones and rehash:");
    let mut map: ProbeMap<u32, u32> = ProbeMap::with_capacity(16);

    for i in 0..12 {
        map.insert(i, i * i)?;
    }
    for i in 0..6 {
        map.remove(&i);
    }
    println!(
        "   after removals: {} entries over {} slots",
        map.len(),
        map.capacity()
    );

    // tombstones go away and the table shrinks to the load factor bound
    map.rehash(0)?;
    println!(
        "   after rehash(0): {} entries over {} slots",
        map.len(),
        map.capacity()
    );

    for i in 6..12 {
        assert_eq!(map.get(&i), Some(&(i * i)));
    }
    println!("   all surviving entries still resolve");
    Ok(())
}

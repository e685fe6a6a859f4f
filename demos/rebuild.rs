//! Rebuild example for gazetteer-rs
//!
//! Readers keep querying while a new snapshot is built and swapped in.

use gazetteer_core::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    let shared = Arc::new(SharedGazetteer::from_arc(Gazetteer::load()?));

    std::thread::scope(|s| {
        for id in 0..4 {
            let shared = Arc::clone(&shared);
            s.spawn(move || {
                let gz = shared.current();
                println!(
                    "reader {id}: 杭州/西湖 -> {:?}",
                    gz.resolve_code("", "杭州", "西湖")
                );
            });
        }

        s.spawn(|| {
            let rows = [
                Row::province("CN033000000", "浙江省"),
                Row::city("CN033000000", "CN033001000", "杭州市"),
                Row::district("CN033001000", "CN033001012", "西湖区"),
            ];
            match shared.rebuild_with(rows) {
                Ok(()) => println!("writer: published a new snapshot"),
                Err(e) => println!("writer: rebuild failed, old snapshot kept: {e}"),
            }
        });
    });

    println!("provinces now: {}", shared.current().stats().provinces);
    Ok(())
}

use flightpath::RouteNetwork;
use flexi_logger::Logger;
use log::info;


fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=debug shows the search itself
    let _logger = Logger::try_with_env_or_str("info")?.start()?;

    let mut network = RouteNetwork::new();
    let flights = [
        ("New York", "London", 500),
        ("New York", "Paris", 600),
        ("London", "Paris", 150),
        ("London", "Berlin", 200),
        ("Paris", "Berlin", 180),
        ("Paris", "Rome", 250),
        ("Berlin", "Rome", 300),
        ("Rome", "New York", 700),
    ];
    for (from, to, cost) in flights {
        network.add_flight(from, to, cost)?;
    }
    info!("loaded {} flights between {} cities", flights.len(), network.city_count());

    let (from, to) = ("New York", "Rome");
    for max_stops in 0..=2 {
        match network.cheapest_route(from, to, max_stops)? {
            Some((cities, price)) => {
                println!("Cheapest price from {from} to {to} with at most {max_stops} stop(s): ${price}");
                println!("  route: {}", cities.join(" -> "));
            }
            None => println!("No route found from {from} to {to} with at most {max_stops} stop(s)."),
        }
    }

    Ok(())
}

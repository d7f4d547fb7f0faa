fn main() {
    let mut engine = tickermatch::MatchingEngine::new();
    let instrument = "DEMO";

    let buy = engine
        .submit(tickermatch::Side::Buy, instrument, 100, 50)
        .expect("valid order");
    let sell = engine
        .submit(tickermatch::Side::Sell, instrument, 60, 45)
        .expect("valid order");

    let trades = engine.match_instrument(instrument);

    println!("buy seq: {buy}, sell seq: {sell}");
    println!("trades: {trades:?}");
    println!("book: {:?}", engine.snapshot(instrument, 5));
}

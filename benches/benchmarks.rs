criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        bowling_closing_frames,
        playing_full_games,
}

fn bowling_closing_frames(c: &mut criterion::Criterion) {
    c.bench_function("bowl one closing frame", |b| {
        let ref mut dice = Dice::seeded(42);
        b.iter(|| Frame::bowl(dice, true))
    });
}

fn playing_full_games(c: &mut criterion::Criterion) {
    c.bench_function("play a full ten-seat game", |b| {
        b.iter(|| {
            let ref mut dice = Dice::seeded(0xB0B5);
            let mut game = Game::new(10).expect("ten seats is legal");
            game.run(dice);
            game.winner().map(|p| p.total())
        })
    });
}

use tenpin::game::Frame;
use tenpin::game::Game;
use tenpin::roll::Dice;

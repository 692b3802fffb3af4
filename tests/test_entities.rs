use kokaton_fight::entities::*;

#[test]
fn rect_edges_and_center() {
    let r = Rect::new(10, 20, 30, 40);
    assert_eq!(r.left(), 10);
    assert_eq!(r.right(), 40);
    assert_eq!(r.top(), 20);
    assert_eq!(r.bottom(), 60);
    assert_eq!(r.center(), (25, 40));
}

#[test]
fn rect_from_center_round_trips_center() {
    let r = Rect::from_center(300, 200, 60, 60);
    assert_eq!(r, Rect::new(270, 170, 60, 60));
    assert_eq!(r.center(), (300, 200));
}

#[test]
fn rect_translate_keeps_size() {
    let r = Rect::new(0, 0, 20, 10).translate(Velocity::new(5, -5));
    assert_eq!(r, Rect::new(5, -5, 20, 10));
}

#[test]
fn direction_from_velocity_covers_eight_facings() {
    let cases = [
        ((5, 0), Direction::Right),
        ((5, -5), Direction::UpRight),
        ((0, -5), Direction::Up),
        ((-5, -5), Direction::UpLeft),
        ((-5, 0), Direction::Left),
        ((-5, 5), Direction::DownLeft),
        ((0, 5), Direction::Down),
        ((5, 5), Direction::DownRight),
    ];
    for ((dx, dy), dir) in cases {
        assert_eq!(Direction::from_velocity(Velocity::new(dx, dy)), Some(dir));
    }
    assert_eq!(Direction::from_velocity(Velocity::ZERO), None);
}

#[test]
fn direction_index_matches_all_order() {
    for (i, dir) in Direction::ALL.iter().enumerate() {
        assert_eq!(dir.index(), i);
    }
}

#[test]
fn entity_bounds_is_the_box() {
    let r = Rect::new(5, 6, 20, 20);
    let player = Player {
        rect: r,
        sprite: PlayerSprite::Facing(Direction::Right),
    };
    let projectile = Projectile {
        rect: r,
        velocity: Velocity::new(5, 0),
    };
    let hazard = Hazard {
        rect: r,
        velocity: Velocity::new(5, 5),
        radius: 10,
    };
    let effect = EffectTimer {
        rect: r,
        frames_left: 20,
    };
    assert_eq!(player.bounds(), r);
    assert_eq!(projectile.bounds(), r);
    assert_eq!(hazard.bounds(), r);
    assert_eq!(effect.bounds(), r);
}

#[test]
fn scoreboard_label_tracks_score() {
    let mut s = Scoreboard::new();
    assert_eq!(s.score(), 0);
    assert_eq!(s.label(), "Score: 0");

    s.add(1);
    assert_eq!(s.score(), 1);
    assert_eq!(s.label(), "Score: 1");

    s.add(3);
    assert_eq!(s.label(), "Score: 4");
}

#[test]
fn effect_mirrors_on_odd_counters() {
    let mut e = EffectTimer {
        rect: Rect::new(0, 0, 50, 50),
        frames_left: 20,
    };
    assert!(!e.is_mirrored());
    e.frames_left = 19;
    assert!(e.is_mirrored());
}

#[test]
fn defaults_match_the_classic_setup() {
    let cfg = GameConfig::default();
    assert_eq!(cfg.viewport, Viewport { width: 1100, height: 650 });
    assert_eq!(cfg.hazard_count, 5);
}

#[test]
fn game_state_clone_is_independent() {
    let original = GameState {
        viewport: Viewport::default(),
        player: Player {
            rect: Rect::new(0, 0, 60, 60),
            sprite: PlayerSprite::Facing(Direction::Right),
        },
        projectiles: Vec::new(),
        hazards: Vec::new(),
        effects: Vec::new(),
        scoreboard: Scoreboard::new(),
        status: GameStatus::Running,
        frame: 0,
    };
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.rect.x = 99;
    cloned.scoreboard.add(1);
    cloned.hazards.push(Hazard {
        rect: Rect::new(5, 5, 20, 20),
        velocity: Velocity::new(5, 5),
        radius: 10,
    });

    assert_eq!(original.player.rect.x, 0);
    assert_eq!(original.scoreboard.score(), 0);
    assert!(original.hazards.is_empty());
}

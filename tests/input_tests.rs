use rand::{rngs::SmallRng, SeedableRng};
use seabattle::input::random_placement_command;
use seabattle::{
    parse_placement, parse_target, Alphabet, Coord, Dimensions, Orientation, ParseError, ShipType,
};

const STD: Dimensions = Dimensions::STANDARD;

#[test]
fn test_parse_target_latin() {
    assert_eq!(parse_target("A0", &Alphabet::LATIN, STD), Ok(Coord::new(0, 0)));
    assert_eq!(parse_target(" j9 \n", &Alphabet::LATIN, STD), Ok(Coord::new(9, 9)));
    assert_eq!(parse_target("c7", &Alphabet::LATIN, STD), Ok(Coord::new(2, 7)));
}

#[test]
fn test_parse_target_rejects_malformed() {
    let l = &Alphabet::LATIN;
    assert_eq!(parse_target("", l, STD), Err(ParseError::Empty));
    assert_eq!(parse_target("K1", l, STD), Err(ParseError::BadColumn('K')));
    assert_eq!(parse_target("1A", l, STD), Err(ParseError::BadColumn('1')));
    assert_eq!(parse_target("A", l, STD), Err(ParseError::BadRow));
    assert_eq!(parse_target("A10", l, STD), Err(ParseError::BadRow));
    assert_eq!(parse_target("A1R", l, STD), Err(ParseError::TrailingInput));
}

#[test]
fn test_parse_placement_orientation() {
    let l = &Alphabet::LATIN;
    let cruiser = ShipType::new("cruiser", 2);
    let sailboat = ShipType::new("sailboat", 1);
    assert_eq!(
        parse_placement("b3d", l, STD, cruiser),
        Ok((Coord::new(1, 3), Orientation::Vertical))
    );
    assert_eq!(
        parse_placement("B3R", l, STD, cruiser),
        Ok((Coord::new(1, 3), Orientation::Horizontal))
    );
    assert_eq!(parse_placement("B3", l, STD, cruiser), Err(ParseError::MissingOrientation));
    assert_eq!(parse_placement("B3X", l, STD, cruiser), Err(ParseError::BadOrientation('X')));
    assert_eq!(parse_placement("B3DD", l, STD, cruiser), Err(ParseError::TrailingInput));
    assert_eq!(
        parse_placement("B3", l, STD, sailboat),
        Ok((Coord::new(1, 3), Orientation::Horizontal))
    );
}

#[test]
fn test_cyrillic_alphabet() {
    let a = &Alphabet::CYRILLIC;
    assert_eq!(parse_target("к9", a, STD), Ok(Coord::new(9, 9)));
    assert_eq!(parse_target("А0", a, STD), Ok(Coord::new(0, 0)));
    // latin letters are not columns in this alphabet
    assert_eq!(parse_target("A0", a, STD), Err(ParseError::BadColumn('A')));
    assert_eq!(
        parse_placement("в2в", a, STD, ShipType::new("cruiser", 2)),
        Ok((Coord::new(2, 2), Orientation::Vertical))
    );
    assert_eq!(
        parse_placement("Б5П", a, STD, ShipType::new("cruiser", 2)),
        Ok((Coord::new(1, 5), Orientation::Horizontal))
    );
    assert_eq!(a.column_label(9), Some('К'));
}

#[test]
fn test_wider_board_multi_digit_rows() {
    let dims = Dimensions::new(12, 10).unwrap();
    assert_eq!(parse_target("L9", &Alphabet::LATIN, dims), Ok(Coord::new(11, 9)));
    let tall = Dimensions::new(8, 14).unwrap();
    assert_eq!(parse_target("h13", &Alphabet::LATIN, tall), Ok(Coord::new(7, 13)));
    assert_eq!(parse_target("I1", &Alphabet::LATIN, tall), Err(ParseError::BadColumn('I')));
}

#[test]
fn test_format_round_trip_through_parser() {
    let l = &Alphabet::LATIN;
    let at = Coord::new(4, 6);
    let text = l.format(at).to_string();
    assert_eq!(text, "E6");
    assert_eq!(parse_target(&text, l, STD), Ok(at));

    let cyr = &Alphabet::CYRILLIC;
    let text = cyr.format(Coord::new(9, 0)).to_string();
    assert_eq!(text, "К0");
    assert_eq!(parse_target(&text, cyr, STD), Ok(Coord::new(9, 0)));
}

#[test]
fn test_random_commands_always_parse() {
    let mut rng = SmallRng::seed_from_u64(3);
    let ship = ShipType::new("destroyer", 3);
    for alphabet in [Alphabet::LATIN, Alphabet::CYRILLIC] {
        for _ in 0..200 {
            let cmd = random_placement_command(&mut rng, &alphabet, STD);
            assert!(parse_placement(&cmd, &alphabet, STD, ship).is_ok(), "{}", cmd);
        }
    }
}

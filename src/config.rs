pub const BOARD_SIZE: u8 = 8;

/// The eight compass directions as integer unit steps, (dx, dy).
pub const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

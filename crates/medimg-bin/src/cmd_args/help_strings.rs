/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

pub static KIND_HELP: &str = "Pixel encoding of the written file

One of uint8, uint16, float or double.
Values are clamped to the range of the encoding, uint16 is stored
using 32 bit unsigned integers.";

pub static LEVEL_HELP: &str = "How much metadata to extract

pixels:  pixels only
origin:  pixels and origin
spacing: pixels, origin and spacing
full:    pixels, origin, spacing and direction";

pub static DIRECTION_HELP: &str = "Direction cosines

Nine values flattened column-major, exactly as printed by
the read command. Values printed by read should be passed back
untouched, they are not a host ordered matrix.";

pub static WRITE_HELP: &str = "Write a raw buffer as an image

The raw file holds native endian 64 bit floats, flattened column-major
over the host order shape, i.e the first axis varies fastest.
Only 3D images can be written.";

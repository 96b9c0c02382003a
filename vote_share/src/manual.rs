/*!

This is the long-form manual for `vote_share` and `runoffsim`.

## How the shares are computed

Every candidate receives a base intention score between 0 and 100. The scores
are not percentages: they only describe how strong a candidate is compared to
the others. With `total` the sum of all the scores:

```text
share           = score / total * 100
estimated votes = share / 100 * electorate size
```

The candidates are then sorted by decreasing share. Two candidates with the
same score have exactly the same share; in that case the candidate listed
first in the input is ranked first. The first two candidates of the ranking
are the runoff qualifiers.

No rounding happens during the computation. The shares always add up to 100%
(up to floating point precision) and the estimated votes always add up to the
electorate size. Rounding to one decimal and grouping digits by thousands is
only done when printing.

If every score is zero, there is nothing to normalize: all the shares and votes
are zero, the candidates stay in input order and `runoffsim` asks to raise at
least one score instead of printing a ranking.

An electorate size of zero or less is rejected with an `InvalidInputError`.

## Running `runoffsim`

Without any argument, `runoffsim` uses the default roster of eight candidates
and an electorate of 11,200,000 valid votes:

```bash
runoffsim
```

Scores and the electorate size can be changed on the command line. The
`--score` flag can be repeated:

```bash
runoffsim --electorate 9500000 --score "Evelyn Matthei=25" --score "Franco Parisi=0"
```

Scores are clamped to 0..=100. The electorate size is clamped to the
configured range (8,000,000 to 13,000,000 by default) and moved to the nearest
step of 100,000.

The `--out` flag writes a summary of the results in JSON format, either to a
file or to the standard output (`--out stdout`). The `--reference` flag
compares this summary with a previously written one and fails when they
differ, which is handy to check a scenario in a script.

## Configuration

A scenario can be described in a JSON file and passed with `--config`. All
the sections are optional:

```json
{
  "outputSettings": {
    "contestName": "First round",
    "outputFile": "summary.json"
  },
  "electorate": {
    "estimatedValidVotes": 11200000,
    "minimum": 8000000,
    "maximum": 13000000,
    "step": 100000
  },
  "candidates": [
    { "name": "Jeannette Jara", "baseIntention": 30 },
    { "name": "Evelyn Matthei" },
    { "name": "Someone New", "baseIntention": 7 }
  ]
}
```

When `candidates` is given, it replaces the default roster and its order is
the tie-break order. A candidate without `baseIntention` takes the default
score of the default roster, or 5 if it is not part of it.
`outputFile` is relative to the directory of the configuration file; the
`--out` flag overrides it.

 */
